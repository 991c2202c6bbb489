use crate::domain::{FilterState, PropertyRecord, Summary};
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

pub const EXPORT_FILENAME: &str = "property_sales.xlsx";

const HEADERS: [&str; 7] = [
    "ID",
    "Address",
    "County",
    "Type",
    "Condition",
    "Sale Date",
    "Price (EUR)",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Builds the workbook bytes: a "Sales" sheet with one row per filtered
/// record and a "Summary" sheet with the aggregates and active filters.
pub fn build_sales_workbook(
    records: &[&PropertyRecord],
    summary: &Summary,
    filter: &FilterState,
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let euro = Format::new().set_num_format("€#,##0");

    let sales = workbook.add_worksheet();
    sales.set_name("Sales").map_err(xlsx_err("sheet name"))?;
    write_sales(sales, records, &bold, &euro)?;

    let totals = workbook.add_worksheet();
    totals.set_name("Summary").map_err(xlsx_err("sheet name"))?;
    write_summary(totals, summary, filter, &bold, &euro)?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_sales(
    sheet: &mut Worksheet,
    records: &[&PropertyRecord],
    bold: &Format,
    euro: &Format,
) -> Result<(), ServerError> {
    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, bold)
            .map_err(xlsx_err(header))?;
    }

    for (i, r) in records.iter().enumerate() {
        let row = (i + 1) as u32;

        sheet.write_number(row, 0, r.id as f64).map_err(xlsx_err("id"))?;
        sheet.write_string(row, 1, &r.address).map_err(xlsx_err("address"))?;
        sheet.write_string(row, 2, &r.county).map_err(xlsx_err("county"))?;
        sheet
            .write_string(row, 3, r.property_type.as_str())
            .map_err(xlsx_err("type"))?;
        sheet.write_string(row, 4, r.size.as_str()).map_err(xlsx_err("condition"))?;
        sheet
            .write_string(row, 5, r.date.format("%Y-%m-%d").to_string())
            .map_err(xlsx_err("date"))?;
        sheet
            .write_number_with_format(row, 6, r.price as f64, euro)
            .map_err(xlsx_err("price"))?;
    }

    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    summary: &Summary,
    filter: &FilterState,
    bold: &Format,
    euro: &Format,
) -> Result<(), ServerError> {
    let search = if filter.search_term.is_empty() {
        "(any)"
    } else {
        filter.search_term.as_str()
    };
    let labels: [(&str, String); 4] = [
        ("Search", search.to_string()),
        ("Type", filter.selected_type.as_str().to_string()),
        ("Min Price", filter.price_range.min.to_string()),
        ("Max Price", filter.price_range.max.to_string()),
    ];

    let mut row = 0u32;
    for (label, value) in labels {
        sheet
            .write_string_with_format(row, 0, label, bold)
            .map_err(xlsx_err(label))?;
        sheet.write_string(row, 1, value).map_err(xlsx_err(label))?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Total Sales", bold)
        .map_err(xlsx_err("count"))?;
    sheet
        .write_number(row, 1, summary.count as f64)
        .map_err(xlsx_err("count"))?;
    row += 1;

    for (label, value) in [
        ("Average Price", summary.average_price),
        ("Median Price", summary.median_price),
    ] {
        sheet
            .write_string_with_format(row, 0, label, bold)
            .map_err(xlsx_err(label))?;
        sheet
            .write_number_with_format(row, 1, value as f64, euro)
            .map_err(xlsx_err(label))?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Price Range", bold)
        .map_err(xlsx_err("distribution header"))?;
    sheet
        .write_string_with_format(row, 1, "Properties", bold)
        .map_err(xlsx_err("distribution header"))?;
    for bucket in &summary.price_distribution {
        row += 1;
        sheet
            .write_string(row, 0, bucket.range)
            .map_err(xlsx_err("bucket"))?;
        sheet
            .write_number(row, 1, bucket.count as f64)
            .map_err(xlsx_err("bucket"))?;
    }

    Ok(())
}

pub fn export_sales_xlsx(
    records: &[&PropertyRecord],
    summary: &Summary,
    filter: &FilterState,
) -> ResultResp {
    let buffer = build_sales_workbook(records, summary, filter)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}
