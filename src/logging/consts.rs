use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_LOGGING_BATCH_SIZE: usize = 100;
pub const QUICKWIT_LOGGING_CHANNEL_CAPACITY: usize = 10_000;
