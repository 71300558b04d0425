//! Output formatting module

use mortar_domain::service::generate_results_report;
use mortar_types::{OutputFormat, Result, RoomField, RoomInput, RoomResult};

pub fn render_results(output_format: OutputFormat, results: &[RoomResult]) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Table => Ok(generate_results_report(results)),
    }
}

pub fn render_rooms(output_format: OutputFormat, rooms: &[RoomInput]) -> Result<String> {
    if output_format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(rooms)?);
    }

    if rooms.is_empty() {
        return Ok("No rooms.\n".to_string());
    }

    let mut out = String::new();
    for (index, room) in rooms.iter().enumerate() {
        out.push_str(&format!("Room {}\n", index + 1));
        for field in RoomField::ALL {
            out.push_str(&format!("  {:<20} {}\n", format!("{}:", field.label()), room.get(field)));
        }
    }
    Ok(out)
}

pub fn output_results(output_format: OutputFormat, results: &[RoomResult]) -> Result<()> {
    println!("{}", render_results(output_format, results)?);
    Ok(())
}

pub fn output_rooms(output_format: OutputFormat, rooms: &[RoomInput]) -> Result<()> {
    print!("{}", render_rooms(output_format, rooms)?);
    Ok(())
}
