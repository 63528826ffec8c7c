use crate::consts::LEADERBOARD_SLOTS;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The ranked slots of a leaderboard, best first.  Filled slots always come
/// before empty ones once the board has been written to.
pub(crate) type Slots = [Option<u32>; LEADERBOARD_SLOTS];

/// The top scores of completed sessions, persisted as a text file with one
/// line per slot: a decimal score, or an empty line for a vacant slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Leaderboard {
    /// Where the board is stored.  A board without a path lives only in
    /// memory.
    path: Option<PathBuf>,
    slots: Slots,
}

impl Leaderboard {
    /// Return the default leaderboard file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snake-eater").join("scores.txt"))
    }

    /// An empty leaderboard that is never written to disk
    pub(crate) fn in_memory() -> Leaderboard {
        Leaderboard {
            path: None,
            slots: [None; LEADERBOARD_SLOTS],
        }
    }

    /// Read the leaderboard stored at `path`.
    ///
    /// This never fails: a missing or unreadable file gives an empty board,
    /// and lines that aren't scores become empty slots.
    pub(crate) fn load(path: PathBuf) -> Leaderboard {
        let slots = match fs_err::read_to_string(&path) {
            Ok(src) => parse_slots(&src),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => [None; LEADERBOARD_SLOTS],
            Err(e) => {
                tracing::warn!("Failed to read leaderboard; starting with an empty one: {e}");
                [None; LEADERBOARD_SLOTS]
            }
        };
        Leaderboard {
            path: Some(path),
            slots,
        }
    }

    pub(crate) fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Merge `score` into the board and save it.
    ///
    /// The in-memory board is updated even if saving fails.
    pub(crate) fn record(&mut self, score: u32) -> Result<(), SaveError> {
        let mut scores = self.slots.iter().flatten().copied().collect::<Vec<_>>();
        scores.push(score);
        scores.sort_unstable_by(|a, b| b.cmp(a));
        self.slots = [None; LEADERBOARD_SLOTS];
        for (slot, sc) in self.slots.iter_mut().zip(scores) {
            *slot = Some(sc);
        }
        self.save()
    }

    /// Empty every slot and save the board.
    ///
    /// The in-memory board is cleared even if saving fails.
    pub(crate) fn clear(&mut self) -> Result<(), SaveError> {
        self.slots = [None; LEADERBOARD_SLOTS];
        self.save()
    }

    /// Write the whole board to a temporary file beside the real one, then
    /// rename it into place so that readers never see a partial write
    fn save(&self) -> Result<(), SaveError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let staging = staging_path(path);
        fs_err::write(&staging, render_slots(&self.slots)).map_err(SaveError::write)?;
        fs_err::rename(&staging, path).map_err(SaveError::rename)?;
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".tmp");
    PathBuf::from(s)
}

fn parse_slots(src: &str) -> Slots {
    let mut slots = [None; LEADERBOARD_SLOTS];
    for (lineno, (slot, line)) in (1..).zip(slots.iter_mut().zip(src.lines())) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_score(line) {
            Some(score) => *slot = Some(score),
            None => tracing::warn!(lineno, "Ignoring invalid leaderboard entry {line:?}"),
        }
    }
    slots
}

fn parse_score(s: &str) -> Option<u32> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse::<u32>().ok()
    } else {
        None
    }
}

fn render_slots(slots: &Slots) -> String {
    let mut out = String::new();
    for slot in slots {
        if let Some(score) = slot {
            out.push_str(&score.to_string());
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Error)]
#[error("Failed to save leaderboard to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }

    fn rename(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Rename(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write leaderboard file")]
    Write(#[source] std::io::Error),
    #[error("failed to move leaderboard file into place")]
    Rename(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const EMPTY: Slots = [None; LEADERBOARD_SLOTS];

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempdir().unwrap();
        let board = Leaderboard::load(tmp.path().join("scores.txt"));
        assert_eq!(board.slots(), &EMPTY);
    }

    #[test]
    fn record_sorts_descending() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("scores.txt");
        let mut board = Leaderboard::load(path.clone());
        board.record(7).unwrap();
        board.record(15).unwrap();
        board.record(3).unwrap();
        let expected = [
            Some(15),
            Some(7),
            Some(3),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        ];
        assert_eq!(board.slots(), &expected);
        assert_eq!(
            fs_err::read_to_string(&path).unwrap(),
            "15\n7\n3\n\n\n\n\n\n\n\n"
        );
        assert_eq!(Leaderboard::load(path).slots(), &expected);
    }

    #[test]
    fn record_keeps_top_ten() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("scores.txt");
        let mut board = Leaderboard::load(path.clone());
        for score in [5, 12, 0, 40, 12, 8, 1, 33, 2, 19, 7, 4] {
            board.record(score).unwrap();
            let filled = board.slots().iter().flatten().copied().collect::<Vec<_>>();
            assert!(filled.len() <= LEADERBOARD_SLOTS);
            assert!(filled.windows(2).all(|w| w[0] >= w[1]));
        }
        assert_eq!(
            board.slots(),
            &[
                Some(40),
                Some(33),
                Some(19),
                Some(12),
                Some(12),
                Some(8),
                Some(7),
                Some(5),
                Some(4),
                Some(2),
            ]
        );
        assert_eq!(Leaderboard::load(path).slots(), board.slots());
    }

    #[test]
    fn clear() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("scores.txt");
        let mut board = Leaderboard::load(path.clone());
        board.record(9).unwrap();
        board.clear().unwrap();
        assert_eq!(board.slots(), &EMPTY);
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "\n".repeat(10));
        assert_eq!(Leaderboard::load(path).slots(), &EMPTY);
    }

    #[test]
    fn corrupt_lines_become_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("scores.txt");
        fs_err::write(&path, "20\nbanana\n  11 \n-4\n+3\n\n99999999999\n2\n").unwrap();
        let board = Leaderboard::load(path);
        assert_eq!(
            board.slots(),
            &[
                Some(20),
                None,
                Some(11),
                None,
                None,
                None,
                None,
                Some(2),
                None,
                None,
            ]
        );
    }

    #[test]
    fn extra_lines_ignored() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("scores.txt");
        let src = (1..=12).rev().map(|n| format!("{n}\n")).collect::<String>();
        fs_err::write(&path, src).unwrap();
        let board = Leaderboard::load(path);
        assert_eq!(board.slots()[0], Some(12));
        assert_eq!(board.slots()[9], Some(3));
    }

    #[test]
    fn record_merges_with_corrupt_board() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("scores.txt");
        fs_err::write(&path, "\n8\nxyz\n30\n").unwrap();
        let mut board = Leaderboard::load(path);
        board.record(10).unwrap();
        assert_eq!(&board.slots()[..4], &[Some(30), Some(10), Some(8), None]);
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("a").join("b").join("scores.txt");
        let mut board = Leaderboard::load(path.clone());
        board.record(1).unwrap();
        assert!(path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn failed_save_keeps_scores_in_memory() {
        let tmp = tempdir().unwrap();
        // A directory where the file should be makes the final rename fail
        let path = tmp.path().join("scores.txt");
        fs_err::create_dir(&path).unwrap();
        fs_err::write(path.join("keep"), "").unwrap();
        let mut board = Leaderboard::load(path);
        assert!(board.record(42).is_err());
        assert_eq!(board.slots()[0], Some(42));
    }

    #[test]
    fn in_memory_board() {
        let mut board = Leaderboard::in_memory();
        board.record(3).unwrap();
        assert_eq!(board.path, None);
        assert_eq!(board.slots()[0], Some(3));
    }
}
