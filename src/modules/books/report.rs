use std::io::Write;

use super::error::BookError;
use super::models::BookRecord;

/// `price * discount_factor`, no rounding applied.
pub fn discounted_price(record: &BookRecord) -> f64 {
    record.price * record.discount_factor
}

/// The report line without its trailing newline.
pub fn format_report_line(title: &str, price: f64) -> String {
    format!("Price of book {title} is: {price:.2}")
}

/// Derive the discounted price, append the version onto the title, and
/// return the report line.
///
/// The price is taken before the title is touched, so a capacity failure
/// leaves the record exactly as it was.
pub fn render(record: &mut BookRecord) -> Result<String, BookError> {
    let price = discounted_price(record);
    record.title.push_text(record.version.as_str())?;
    Ok(format_report_line(record.title.as_str(), price))
}

/// Render `record` and write the line, newline included, to `out`.
pub fn run<W: Write + ?Sized>(mut record: BookRecord, out: &mut W) -> Result<(), BookError> {
    let mut line = render(&mut record)?;
    line.push('\n');

    out.write_all(line.as_bytes())?;
    out.flush()?;

    tracing::debug!(
        book_id = record.book_id,
        author = %record.author,
        title_len = record.title.len(),
        "report written"
    );

    Ok(())
}
