use log::debug;
use scraper::Html;

use crate::{
    error::{TimetableError, TimetableResult},
    text_manipulators::{extract_text, selector},
};

/// Text of every `td` in the first table of the page, one `Vec` per `tr`.
pub fn extract_rows(html: &str) -> TimetableResult<Vec<Vec<String>>> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Err(TimetableError::Layout(
            "no table found in timetable page".to_string(),
        ));
    };

    let rows: Vec<Vec<String>> = table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(extract_text).collect())
        .collect();
    debug!("Extracted {} rows from timetable table", rows.len());
    Ok(rows)
}

/// Row-major concatenation of all cells.
pub fn flatten_rows(rows: Vec<Vec<String>>) -> Vec<String> {
    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_cells_per_row() {
        let html = r#"
            <html><body>
            <table>
              <tr><td>Date</td><td>Tuesday 18/06/2019</td></tr>
              <tr><td>Venue</td><td><a href="/v/1">Royal Exhibition Building West</a></td></tr>
            </table>
            </body></html>"#;
        let rows = extract_rows(html).unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["Date".to_string(), "Tuesday 18/06/2019".to_string()],
                vec![
                    "Venue".to_string(),
                    "Royal Exhibition Building West".to_string()
                ],
            ]
        );
    }

    #[test]
    fn only_first_table_is_read() {
        let html = "<table><tr><td>a</td></tr></table><table><tr><td>b</td></tr></table>";
        let rows = extract_rows(html).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn header_cells_are_not_data_cells() {
        let html = "<table><tr><th>Exam</th></tr><tr><td>x</td></tr></table>";
        let rows = extract_rows(html).unwrap();
        assert_eq!(rows, vec![vec![], vec!["x".to_string()]]);
    }

    #[test]
    fn missing_table_is_layout_error() {
        let err = extract_rows("<html><body><p>Please log in</p></body></html>").unwrap_err();
        assert!(matches!(err, TimetableError::Layout(_)));
    }

    #[test]
    fn flattens_in_row_major_order() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec![],
            vec!["c".to_string()],
        ];
        assert_eq!(flatten_rows(rows), vec!["a", "b", "c"]);
    }
}
