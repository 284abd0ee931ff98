#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use log::LevelFilter;
    use tictactoe::{parse_move, resolve_level, MoveError, LOG_ENV};

    #[test]
    fn test_parse_every_slot() {
        for i in 0..9 {
            assert_eq!(parse_move(&format!("{}\n", i)), Ok(i));
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_move("9"), Err(MoveError::OutOfRange));
        assert_eq!(parse_move("-1"), Err(MoveError::OutOfRange));
        assert_eq!(parse_move("100"), Err(MoveError::OutOfRange));
    }

    #[test]
    fn test_parse_garbage() {
        for input in ["", "  ", "x", "4.0", "1 2", "four"] {
            assert_eq!(parse_move(input), Err(MoveError::Unparseable), "{:?}", input);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::OccupiedSlot(5).to_string(), "Slot 5 is already taken");
        assert_eq!(
            MoveError::OutOfRange.to_string(),
            "Move is out of range - must be 0-8"
        );
    }

    #[test]
    fn test_explicit_log_level_wins() {
        assert_eq!(resolve_level(Some(LevelFilter::Debug)), LevelFilter::Debug);
        assert_eq!(resolve_level(Some(LevelFilter::Off)), LevelFilter::Off);
    }

    // One test owns the environment variable so parallel tests never race on it.
    #[test]
    fn test_log_level_from_environment() {
        std::env::remove_var(LOG_ENV);
        assert_eq!(resolve_level(None), LevelFilter::Warn);

        std::env::set_var(LOG_ENV, "debug");
        assert_eq!(resolve_level(None), LevelFilter::Debug);
        assert_eq!(resolve_level(Some(LevelFilter::Error)), LevelFilter::Error);

        std::env::set_var(LOG_ENV, "bogus");
        assert_eq!(resolve_level(None), LevelFilter::Warn);

        std::env::remove_var(LOG_ENV);
    }
}
