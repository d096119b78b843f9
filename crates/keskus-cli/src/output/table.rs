use keskus_core::model::{DeviceRow, DisplayOptions};
use keskus_core::summary::outcome::{AggregatedItem, Summary};
use keskus_core::summary::protection::split_suoja;
use keskus_core::symbols;

pub fn print(summary: &Summary, opts: &DisplayOptions) {
    println!(
        "Total devices: {}    Unique types: {}    Protection values: {}",
        summary.total_count, summary.unique_types, summary.unique_protections
    );
    println!();

    print_device_summary(summary, opts);
    print_protection_breakdown(summary);
    print_all_devices(summary, opts);
}

/// Icon ids rendered as display names where the catalog knows them;
/// unknown ids pass through so unresolved detections stay visible.
fn icon_label(icons: &[String]) -> String {
    if icons.is_empty() {
        return "-".to_string();
    }
    icons
        .iter()
        .map(|id| {
            symbols::symbol_by_id(id)
                .map(|s| s.name.to_string())
                .unwrap_or_else(|| id.clone())
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn suoja_label(suoja: &str, opts: &DisplayOptions) -> String {
    if suoja.is_empty() {
        return "-".to_string();
    }
    let split = split_suoja(suoja, opts.separate_input_output);
    match split.output {
        Some(output) => format!("In: {} / Out: {}", split.input, output),
        None => split.input,
    }
}

fn cable_label(item: &AggregatedItem) -> String {
    let mut label = if item.kaapeli_types.is_empty() {
        "-".to_string()
    } else {
        item.kaapeli_types.join(", ")
    };
    if item.has_cable_mismatch {
        label.push_str(" (MISMATCH)");
    }
    label
}

fn print_device_summary(summary: &Summary, opts: &DisplayOptions) {
    println!("=== Device Summary ===\n");

    if summary.items.is_empty() {
        println!("  (no classified devices)\n");
        return;
    }

    let icon_width = summary
        .items
        .iter()
        .map(|i| icon_label(&i.icons).len())
        .max()
        .unwrap_or(10);
    let suoja_width = summary
        .items
        .iter()
        .map(|i| suoja_label(&i.suoja, opts).len())
        .max()
        .unwrap_or(6);

    for item in &summary.items {
        if opts.show_cable {
            println!(
                "  {:<iw$}  {:<sw$}  {:>4}x  {}",
                icon_label(&item.icons),
                suoja_label(&item.suoja, opts),
                item.count,
                cable_label(item),
                iw = icon_width,
                sw = suoja_width
            );
        } else {
            println!(
                "  {:<iw$}  {:<sw$}  {:>4}x",
                icon_label(&item.icons),
                suoja_label(&item.suoja, opts),
                item.count,
                iw = icon_width,
                sw = suoja_width
            );
        }
    }
    println!();
    println!("  Total: {} device(s)\n", summary.total_count);
}

fn print_protection_breakdown(summary: &Summary) {
    println!("=== By Protection Value ===\n");

    if summary.by_protection.is_empty() {
        println!("  (no devices)\n");
        return;
    }

    let suoja_width = summary
        .by_protection
        .iter()
        .map(|e| e.suoja.len().max(1))
        .max()
        .unwrap_or(6);

    for entry in &summary.by_protection {
        let suoja = if entry.suoja.is_empty() { "-" } else { &entry.suoja };
        println!(
            "  {:<sw$}  {:>4} device(s)  {:>6}%",
            suoja,
            entry.count,
            entry.percentage,
            sw = suoja_width
        );
    }
    println!();
}

fn print_all_devices(summary: &Summary, opts: &DisplayOptions) {
    println!("=== All Extracted Data ({} rows) ===\n", summary.devices.len());

    if summary.devices.is_empty() {
        return;
    }

    let nro_width = summary
        .devices
        .iter()
        .map(|d| d.nro.len().max(1))
        .max()
        .unwrap_or(4);
    let text_width = summary
        .devices
        .iter()
        .map(|d| d.kuvateksti.len().max(1))
        .max()
        .unwrap_or(10);

    for device in &summary.devices {
        print_device_row(device, opts, nro_width, text_width);
    }
    println!();
}

fn print_device_row(device: &DeviceRow, opts: &DisplayOptions, nro_width: usize, text_width: usize) {
    let nro = if device.nro.is_empty() { "-" } else { &device.nro };
    let text = if device.kuvateksti.is_empty() {
        "-"
    } else {
        &device.kuvateksti
    };

    if opts.show_cable {
        let kaapeli = if device.kaapeli.is_empty() {
            "-"
        } else {
            &device.kaapeli
        };
        println!(
            "  p{:<3} {:<nw$}  {:<tw$}  {:<14}  {:<14}  {}",
            device.page_number,
            nro,
            text,
            suoja_label(&device.suoja, opts),
            kaapeli,
            icon_label(&device.icons),
            nw = nro_width,
            tw = text_width
        );
    } else {
        println!(
            "  p{:<3} {:<nw$}  {:<tw$}  {:<14}  {}",
            device.page_number,
            nro,
            text,
            suoja_label(&device.suoja, opts),
            icon_label(&device.icons),
            nw = nro_width,
            tw = text_width
        );
    }
}
