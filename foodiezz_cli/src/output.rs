use foodiezz_lib::ColumnWidths;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Remove, Style};
use tabled::{Table, Tabled};

const NAME_HEADER: &str = "Name";
const ADDRESS_HEADER: &str = "Address";

#[derive(Tabled)]
struct TruckRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
}

// -- Row builders --

/// Pads every cell to the widest value across the whole result set, so
/// consecutive pages line up even though each is its own table.
fn build_truck_rows(page: &[(&str, &str)], widths: ColumnWidths) -> Vec<TruckRow> {
    let name_width = widths.name.max(NAME_HEADER.len());
    let address_width = widths.location.max(ADDRESS_HEADER.len());
    page.iter()
        .map(|(name, address)| TruckRow {
            name: format!("{:<width$}", name, width = name_width),
            address: format!("{:>width$}", address, width = address_width),
        })
        .collect()
}

// -- Table output --

/// Renders one page: names left-aligned, addresses right-aligned, no border.
/// The header row is only printed when `with_header` is set.
pub fn render_page(page: &[(&str, &str)], widths: ColumnWidths, with_header: bool) -> String {
    let mut table = Table::new(build_truck_rows(page, widths));
    if !with_header {
        table.with(Remove::row(Rows::first()));
    }
    table
        .with(Style::blank())
        .modify(Columns::single(1), Alignment::right());
    table.to_string()
}
