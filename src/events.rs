use std::io;
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use unsegen::input::Input;

use crate::config::Config;

pub enum Event {
    Input(Input),
    /// Time to re-read the clock, so the today marker follows midnight.
    Update,
}

/// Merges terminal input and clock ticks into one stream for the main loop.
pub struct Dispatcher {
    rx: Receiver<Event>,
    _sources: Vec<JoinHandle<()>>,
}

impl Default for Dispatcher {
    fn default() -> Dispatcher {
        Dispatcher::from_config(&Config::default())
    }
}

impl Dispatcher {
    pub fn from_config(config: &Config) -> Dispatcher {
        let (tx, rx) = mpsc::channel();
        let sources = vec![spawn_input(tx.clone()), spawn_ticks(tx, config.tick_rate())];
        log::debug!("Ticking every {:?}", config.tick_rate());

        Dispatcher {
            rx,
            _sources: sources,
        }
    }

    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}

fn spawn_input(tx: Sender<Event>) -> JoinHandle<()> {
    thread::spawn(move || {
        for evt in Input::read_all(io::stdin().lock()) {
            match evt {
                Ok(key) => {
                    if tx.send(Event::Input(key)).is_err() {
                        return;
                    }
                }
                Err(e) => log::warn!("Could not read input: {}", e),
            }
        }
    })
}

/// Sends `Event::Update` every `tick_rate` until the receiving side hangs up.
fn spawn_ticks(tx: Sender<Event>, tick_rate: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        while tx.send(Event::Update).is_ok() {
            thread::sleep(tick_rate);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_until_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel();
        let ticks = spawn_ticks(tx, Duration::from_millis(1));

        for _ in 0..3 {
            assert!(matches!(rx.recv(), Ok(Event::Update)));
        }

        drop(rx);
        assert!(ticks.join().is_ok());
    }
}
