pub(crate) mod clock;
pub(crate) mod stamp;
pub(crate) mod timezone;

pub(crate) use clock::{Clock, FixedClock, SystemClock};
pub(crate) use stamp::{RunStamp, parse_stamp};
pub(crate) use timezone::Timezone;
