use console::Style;
use mcad_core::batch::{BatchEntry, BatchOutcome};
use mcad_core::config::ImagingConfig;
use mcad_core::geometry::CraterSizeReport;
use mcad_core::units::format_length;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_crater_report(report: &CraterSizeReport, imaging: &ImagingConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Crater Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!("  {}", s.header.apply_to("Input"));
    println!(
        "    {:<18}{}",
        s.label.apply_to("Camera position"),
        s.value.apply_to(format!("{} m", report.camera_position))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Pixel diameter"),
        s.value.apply_to(format!("{} px", report.pixel_diameter))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Field of view"),
        s.value.apply_to(format!(
            "{:.4} x {:.4} rad",
            imaging.fov.x_rad, imaging.fov.y_rad
        ))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Sensor"),
        s.value.apply_to(format!(
            "{}x{} px",
            imaging.resolution.width_px, imaging.resolution.height_px
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Result"));
    print_length(&s, "Camera altitude", report.altitude_m);
    print_length(&s, "Image width", report.footprint_width_m);
    print_length(&s, "Image height", report.footprint_height_m);
    print_length(&s, "Crater diameter", report.crater_diameter_m);
    if report.altitude_m == 0.0 {
        println!(
            "    {}",
            s.disabled
                .apply_to("camera at body center: all lengths degenerate to zero")
        );
    }
    println!();
}

fn print_length(s: &Styles, label: &str, meters: f64) {
    println!(
        "    {:<18}{}",
        s.label.apply_to(label),
        s.value.apply_to(format_length(meters))
    );
}

pub fn print_batch_table(folder: &str, entries: &[BatchEntry]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.path.apply_to(folder));
    println!();
    println!(
        "  {:<28}{:>16}{:>16}",
        s.header.apply_to("Image"),
        s.header.apply_to("Altitude (m)"),
        s.header.apply_to("Crater (m)")
    );
    for entry in entries {
        match &entry.outcome {
            BatchOutcome::Measured(r) => println!(
                "  {:<28}{:>16.2}{:>16.2}",
                entry.file_name, r.altitude_m, r.crater_diameter_m
            ),
            BatchOutcome::Failed(msg) => println!(
                "  {:<28}{}",
                entry.file_name,
                s.disabled.apply_to(msg)
            ),
        }
    }

    let measured = entries.iter().filter(|e| e.report().is_some()).count();
    println!();
    println!(
        "  {} of {} images measured",
        s.value.apply_to(measured),
        entries.len()
    );
}
