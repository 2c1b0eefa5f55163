#[cfg(test)]
mod common_tests {
    mod byte_size_tests {
        use crate::common::common::parse_byte_size;

        #[test]
        fn test_parse_byte_size_suffixes() {
            assert_eq!(parse_byte_size("512"), Some(512));
            assert_eq!(parse_byte_size("2k"), Some(2 * 1024));
            assert_eq!(parse_byte_size("64M"), Some(64 * 1_048_576));
            assert_eq!(parse_byte_size("1G"), Some(1_073_741_824));
            assert_eq!(parse_byte_size(" 8m "), Some(8 * 1_048_576));
        }

        #[test]
        fn test_parse_byte_size_non_positive_disables() {
            assert_eq!(parse_byte_size("-1"), Some(0));
            assert_eq!(parse_byte_size("0M"), Some(0));
        }

        #[test]
        fn test_parse_byte_size_invalid() {
            assert_eq!(parse_byte_size(""), None);
            assert_eq!(parse_byte_size("M"), None);
            assert_eq!(parse_byte_size("12x"), None);
            assert_eq!(parse_byte_size("ten"), None);
        }

        #[test]
        fn test_parse_byte_size_overflow() {
            assert_eq!(parse_byte_size("9223372036854775807G"), None);
        }
    }

    mod log_level_tests {
        use crate::common::common::log_level_filter;

        #[test]
        fn test_log_level_filter() {
            assert_eq!(log_level_filter("info"), Some(log::LevelFilter::Info));
            assert_eq!(log_level_filter("off"), Some(log::LevelFilter::Off));
            assert_eq!(log_level_filter("verbose"), None);
        }
    }

    mod clock_tests {
        use crate::cache::traits::clock::Clock;
        use crate::common::structs::manual_clock::ManualClock;
        use crate::common::structs::system_clock::SystemClock;

        #[test]
        fn test_manual_clock_advance_is_shared() {
            let clock = ManualClock::starting_at(1_000);
            let shared = clock.clone();
            clock.advance(61);
            assert_eq!(shared.now(), 1_061);
        }

        #[test]
        fn test_system_clock_is_after_2020() {
            assert!(SystemClock.now() > 1_577_836_800);
        }
    }

    mod process_memory_tests {
        use crate::common::structs::process_memory::ProcessMemory;

        #[test]
        fn test_parse_status_vm_rss() {
            let status = "Name:\tcms-cache\nVmPeak:\t  20000 kB\nVmRSS:\t   1536 kB\nThreads:\t1\n";
            assert_eq!(ProcessMemory::parse_status(status), Some(1536 * 1024));
        }

        #[test]
        fn test_parse_status_missing_line() {
            assert_eq!(ProcessMemory::parse_status("Name:\tcms-cache\n"), None);
        }
    }

    mod custom_error_tests {
        use crate::common::structs::custom_error::CustomError;

        #[test]
        fn test_custom_error_display() {
            let error = CustomError::new("could not create config.toml file");
            assert_eq!(format!("{}", error), "could not create config.toml file");
            assert_eq!(error.message(), "could not create config.toml file");
        }
    }
}
