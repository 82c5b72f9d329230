use super::{MediaHost, PlaybackController, UiCommand};
use crate::api::PlayerError;
use crate::db::MetadataStore;
use crate::utils::format_progress;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Index reached from `current` in a circular playlist of `len` items.
fn step_index(current: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    }
}

impl<H: MediaHost, S: MetadataStore> PlaybackController<H, S> {
    /// Move to the next/previous item, or a uniformly random one when
    /// shuffling (the current item may be picked again).
    pub fn advance(&mut self, direction: Direction) -> Result<(), PlayerError> {
        let len = self.playlist.len();
        if len == 0 {
            return Ok(());
        }
        let target = if self.flags.shuffle {
            rand::thread_rng().gen_range(0..len)
        } else {
            step_index(self.current_index.min(len - 1), len, direction)
        };
        tracing::debug!("advance {direction:?}: {} -> {target}", self.current_index);
        self.load(target)
    }

    /// The active media played to its end.
    pub fn on_natural_end(&mut self) -> Result<(), PlayerError> {
        if !self.flags.loop_enabled {
            return self.advance(Direction::Next);
        }
        if self.session.as_ref().map_or(true, |s| !s.is_playable()) {
            return Ok(());
        }
        self.host.set_current_time(0.0);
        let duration = self.host.duration();
        self.emit(UiCommand::Progress { percent: 0.0 });
        self.emit(UiCommand::TimeLabel(format_progress(0.0, duration)));
        match self.host.play() {
            Ok(()) => {
                self.set_playing(true);
                Ok(())
            }
            Err(err) => {
                self.set_playing(false);
                Err(self.report(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    fn three() -> TestController {
        loaded(&[
            ("a.mp3", "audio/mpeg"),
            ("b.mp3", "audio/mpeg"),
            ("c.mp3", "audio/mpeg"),
        ])
    }

    #[test]
    fn next_wraps_to_start() {
        let mut c = three();
        c.load(2).unwrap();
        c.advance(Direction::Next).unwrap();
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut c = three();
        c.advance(Direction::Previous).unwrap();
        assert_eq!(c.current_index(), Some(2));
        c.advance(Direction::Previous).unwrap();
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn advance_on_empty_playlist_is_a_no_op() {
        let mut c = controller();
        c.advance(Direction::Next).unwrap();
        assert!(c.session().is_none());
        assert!(c.host().created.is_empty());
    }

    #[test]
    fn shuffle_stays_in_range_for_every_length() {
        for len in 1..=6 {
            let names: Vec<String> = (0..len).map(|i| format!("{i}.mp3")).collect();
            let pairs: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "audio/mpeg")).collect();
            let mut c = loaded(&pairs);
            c.toggle_shuffle();
            for _ in 0..50 {
                c.advance(Direction::Next).unwrap();
                assert!(c.current_index().unwrap() < len);
                c.advance(Direction::Previous).unwrap();
                assert!(c.current_index().unwrap() < len);
            }
        }
    }

    #[test]
    fn natural_end_with_loop_restarts_same_item() {
        let mut c = three();
        c.load(1).unwrap();
        c.toggle_loop();
        c.toggle_play();
        c.host_mut().position = 100.0;
        let handles_before = c.handles().len();

        c.on_natural_end().unwrap();

        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.host().position, 0.0);
        assert!(c.flags().playing);
        assert_eq!(c.handles().len(), handles_before);
    }

    #[test]
    fn natural_end_without_loop_advances() {
        let mut c = three();
        c.load(2).unwrap();
        c.toggle_play();
        c.on_natural_end().unwrap();
        assert_eq!(c.current_index(), Some(0));
        assert!(!c.flags().playing);
    }

    #[test]
    fn natural_end_matches_advance_next() {
        let mut by_end = three();
        let mut by_next = three();
        for _ in 0..4 {
            by_end.on_natural_end().unwrap();
            by_next.advance(Direction::Next).unwrap();
            assert_eq!(by_end.current_index(), by_next.current_index());
            assert_eq!(by_end.flags(), by_next.flags());
        }
    }

    #[test]
    fn step_index_is_circular() {
        assert_eq!(step_index(0, 1, Direction::Next), 0);
        assert_eq!(step_index(0, 1, Direction::Previous), 0);
        assert_eq!(step_index(1, 3, Direction::Next), 2);
    }
}
