//! Static catalog of demo binaries under test
//!
//! Each entry pairs an executable name inside the install directory with the
//! fixed argument list it is always invoked with. Declaration order here is
//! both execution order and report order.

/// Directory the built demo binaries (and the log files they write) live in.
pub const INSTALL_DIR: &str = "_install";

/// One demo binary and the arguments it is always run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Executable file name inside the install directory
    pub name: &'static str,
    /// Fixed argument list passed on every invocation
    pub args: &'static [&'static str],
}

const HEADLESS: &[&str] = &["--headless"];

/// The full demo suite, in execution order.
pub const CATALOG: &[TestCase] = &[
    TestCase { name: "01_foundation", args: HEADLESS },
    TestCase { name: "02_basic", args: HEADLESS },
    TestCase { name: "03_any_hit", args: HEADLESS },
    TestCase { name: "04_jitter_camera", args: HEADLESS },
    TestCase { name: "05_shadow_miss", args: HEADLESS },
    TestCase { name: "06_reflection", args: HEADLESS },
    TestCase { name: "07_multi_closest_hit", args: HEADLESS },
    TestCase { name: "08_intersection", args: HEADLESS },
    TestCase { name: "09_motion_blur", args: HEADLESS },
    TestCase { name: "10_position_fetch", args: HEADLESS },
    TestCase { name: "11_shader_execution_reorder", args: HEADLESS },
    // The infinite plane demo never converges on its own; cap the frame count
    TestCase { name: "12_infinite_plane", args: &["--headless", "--maxFrames", "100"] },
    TestCase { name: "13_callable_shader", args: HEADLESS },
    TestCase { name: "14_animation", args: HEADLESS },
    TestCase { name: "15_micro_maps_opacity", args: HEADLESS },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_demos_in_order() {
        assert_eq!(CATALOG.len(), 15);
        assert_eq!(CATALOG[0].name, "01_foundation");
        assert_eq!(CATALOG[14].name, "15_micro_maps_opacity");

        // Numeric prefixes are already sorted; declaration order is execution order
        let names: Vec<&str> = CATALOG.iter().map(|c| c.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_every_demo_runs_headless() {
        for case in CATALOG {
            assert!(
                case.args.contains(&"--headless"),
                "{} is missing --headless",
                case.name
            );
        }
    }

    #[test]
    fn test_infinite_plane_is_frame_capped() {
        let case = CATALOG
            .iter()
            .find(|c| c.name == "12_infinite_plane")
            .unwrap();
        assert_eq!(case.args, &["--headless", "--maxFrames", "100"]);
    }
}
