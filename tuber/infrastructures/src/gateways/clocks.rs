use ::use_cases::gateways::Clock;
use ::use_cases::models::descriptors::Timestamp;

pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> Timestamp {
        let now = ::chrono::Local::now();

        Timestamp::builder()
            .date(now.format("%Y-%m-%d").to_string())
            .day(now.format("%a").to_string())
            .time(now.format("%H:%M").to_string())
            .build()
    }
}
