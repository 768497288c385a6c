mod latency;

pub(crate) use latency::latency_handler;
