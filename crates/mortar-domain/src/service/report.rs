//! Text report for calculated rooms

use mortar_types::RoomResult;

pub fn generate_results_report(results: &[RoomResult]) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Mortar Estimate                  \n");
    report.push_str("==================================================\n\n");

    if results.is_empty() {
        report.push_str("No results. Enter at least one room and calculate.\n");
        return report;
    }

    for (index, result) in results.iter().enumerate() {
        report.push_str(&format!("[Room {}]\n", index + 1));
        report.push_str(&format!("  Room Name:       {}\n", result.name));
        report.push_str(&format!("  Room Size:       {}\n", result.size));
        report.push_str(&format!("  Wall Volume:     {} m³\n", result.wall_volume));
        report.push_str(&format!("  Cement Quantity: {} bags\n", result.cement_quantity));
        report.push_str(&format!("  Sand Quantity:   {} m³\n", result.sand_quantity));
        report.push('\n');
    }

    let incomplete = results.iter().filter(|r| r.has_non_finite()).count();
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&format!("  Rooms:           {}\n", results.len()));
    if incomplete > 0 {
        report.push_str(&format!(
            "  Not a number:    {} (check the dimensions and mix ratios)\n",
            incomplete
        ));
    }

    report
}
