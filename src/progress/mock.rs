use std::time::Duration;
use tokio::time::sleep;
use crate::progress::SharedProgressState;
use crate::progress_log;
use log::Level::Info;
use rand::rngs::SmallRng;
use rand::{SeedableRng, Rng};

const TICK: Duration = Duration::from_millis(100);

pub async fn start_mock_progress(progress_state: SharedProgressState) {
    progress_log!(Info, "Starting mock progress feed");
    tokio::spawn(async move {
        let mut rng = SmallRng::from_entropy();
        loop {
            let step = rng.gen_range(1..=3);
            {
                let mut state = progress_state.lock().await;
                state.advance(step);
            }
            sleep(TICK).await;
        }
    });
}
