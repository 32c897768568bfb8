use std::fmt::Write;

use crate::scenario::ScenarioReport;

/// Separator printed after every scenario.
pub const SCENARIO_SEPARATOR: &str = "------------------------------------------------";

/// Returns the textual report of one scenario.
///
/// It lists the sorted cylinders with their positions, the head and then one
/// line per algorithm:
/// ```text
/// Cylinder 0:  20
/// Cylinder 1:  40
/// Cylinder 2:  60
///
/// Current Head Position:  40
///
/// Total Head Distance Moved For SSTF: 60
/// Total Head Distance Moved For SCAN: 1938
/// Total Head Distance Moved For C-LOOK: 20
/// ------------------------------------------------
/// ```
pub fn render_report(report: &ScenarioReport) -> String {
    let mut output = String::new();

    for (i, cylinder) in report.cylinders.iter().enumerate() {
        let _ = writeln!(output, "Cylinder {}:  {}", i, cylinder);
    }
    output.push('\n');

    let _ = writeln!(output, "Current Head Position:  {}", report.head_cylinder);
    output.push('\n');

    for schedule in &report.schedules {
        let _ = writeln!(
            output,
            "Total Head Distance Moved For {}: {}",
            schedule.algorithm, schedule.head_movement
        );
    }
    output.push_str(SCENARIO_SEPARATOR);
    output.push('\n');
    output
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &std::path::Path) -> std::io::Result<()> {
    std::fs::write(path, content)
}
