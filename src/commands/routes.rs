use crate::constants::{LOCATIONS, SUMMARY};

pub fn run() {
    println!("📋 Generated route table\n");
    println!(
        "{:<6} {:<18} {:<12} {:<22} width",
        "method", "path", "tab", "range"
    );

    for spec in LOCATIONS {
        println!(
            "{:<6} {:<18} {:<12} {:<22} -",
            "GET",
            format!("/{}", spec.name),
            spec.sheet_title,
            spec.read_range
        );
        println!(
            "{:<6} {:<18} {:<12} {:<22} {}",
            "POST",
            format!("/{}/write", spec.name),
            spec.sheet_title,
            format!(
                "{}!{}<row>:{}<row>",
                spec.sheet_title, spec.write_col_start, spec.write_col_end
            ),
            spec.write_width
        );
        if spec.appendable {
            println!(
                "{:<6} {:<18} {:<12} {:<22} 15",
                "POST",
                format!("/{}/add", spec.name),
                spec.sheet_title,
                spec.append_range()
            );
        }
    }

    println!(
        "{:<6} {:<18} {:<12} {:<22} -",
        "GET", "/data", SUMMARY.sheet_title, SUMMARY.read_range
    );
    println!(
        "{:<6} {:<18} {:<12} {:<22} {}",
        "POST",
        "/write",
        SUMMARY.sheet_title,
        format!(
            "{}!{}<row>:{}<row>",
            SUMMARY.sheet_title, SUMMARY.write_col_start, SUMMARY.write_col_end
        ),
        SUMMARY.write_width
    );
    println!("{:<6} {:<18} {:<12} {:<22} -", "GET", "/health", "-", "-");
}
