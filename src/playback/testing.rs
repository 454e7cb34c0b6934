// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! A recording playback primitive for exercising the controller without an
//! audio engine.

use std::{cell::RefCell, rc::Rc};

use anyhow::{Result, anyhow};

use crate::playback::primitive::{PlaybackPrimitive, Subscription, SubscriptionId};

pub(crate) type Log = Rc<RefCell<Vec<Command>>>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f64),
    SetSource(String),
    Subscribe(SubscriptionId),
    Unsubscribe(SubscriptionId),
}

#[derive(Default)]
pub(crate) struct FakePrimitive {
    pub(crate) log: Rc<RefCell<Vec<Command>>>,
    pub(crate) next_id: u64,
    pub(crate) reject_play: bool,
}

impl FakePrimitive {
    fn record(&self, command: Command) -> Result<()> {
        self.log.borrow_mut().push(command);
        Ok(())
    }
}

impl PlaybackPrimitive for FakePrimitive {
    fn play(&mut self) -> Result<()> {
        if self.reject_play {
            return Err(anyhow!("play rejected"));
        }
        self.record(Command::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.record(Command::Pause)
    }

    fn set_current_time(&mut self, seconds: f64) -> Result<()> {
        self.record(Command::SetCurrentTime(seconds))
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.record(Command::SetVolume(volume))
    }

    fn set_source(&mut self, url: &str) -> Result<()> {
        self.record(Command::SetSource(url.to_string()))
    }

    fn subscribe(&mut self) -> Result<Subscription> {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.record(Command::Subscribe(id))?;
        let log = Rc::clone(&self.log);
        Ok(Subscription::new(id, move |id| {
            log.borrow_mut().push(Command::Unsubscribe(id))
        }))
    }
}
