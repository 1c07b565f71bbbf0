//! Integration tests for browsing served collections.
//!
//! The server hands out whole families as JSON arrays; these tests run the
//! dashboard side of that contract against payloads of the same shape.

use depot_engine::{next_code, PageMarker, Record, SortDirection, TableState};
use serde_json::{json, Value};

/// A doctors payload as `GET /api/collections/doctors` returns it.
fn doctors_payload(count: usize) -> String {
    let records: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": format!("5f0c{:04}-0000-4000-8000-000000000000", i),
                "code": format!("DOC-{:04}", i),
                "name": format!("Dr. {}", ["Rao", "Okafor", "Silva", "Novak"][i % 4]),
                "speciality": (["Cardiology", "Pediatrics", "Oncology"][i % 3]),
                "registeredOn": format!("2023-{:02}-15", i % 12 + 1),
                "createdAt": "2024-05-01T09:30:00.000Z",
            })
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

#[cfg(test)]
mod browse_tests {
    use super::*;

    #[test]
    fn test_paging_through_served_family() {
        let doctors: Vec<Value> = serde_json::from_str(&doctors_payload(47)).unwrap();
        let mut table = TableState::new();

        let view = table.recompute(&doctors);
        assert_eq!(view.total_pages(), 5);
        assert_eq!(
            view.pagination.window,
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
                PageMarker::Page(4),
                PageMarker::Page(5)
            ]
        );

        table.set_page(5);
        let view = table.recompute(&doctors);
        assert_eq!(view.rows.len(), 7);
        assert_eq!(view.label(), "Showing 41 to 47 of 47 items");
    }

    #[test]
    fn test_search_sort_and_reset() {
        let doctors: Vec<Value> = serde_json::from_str(&doctors_payload(60)).unwrap();
        let mut table = TableState::with_page_size(5)
            .unwrap()
            .with_search_fields(["code", "name", "speciality"]);

        table.set_page(9);
        table.set_query("oncology");
        assert_eq!(table.current_page(), 1);

        table.set_sort("registeredOn");
        table.set_sort("registeredOn");
        assert_eq!(table.sort_direction(), SortDirection::Descending);

        let view = table.recompute(&doctors);
        assert_eq!(view.total_filtered, 20);
        assert_eq!(view.total_pages(), 4);
        let dates: Vec<&str> = view
            .rows
            .iter()
            .filter_map(|r| r["registeredOn"].as_str())
            .collect();
        let mut sorted = dates.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_identity_is_the_served_id() {
        let doctors: Vec<Value> = serde_json::from_str(&doctors_payload(2)).unwrap();
        let view = TableState::new().recompute(&doctors);
        assert_eq!(view.rows[0].id(), "5f0c0001-0000-4000-8000-000000000000");
    }

    #[test]
    fn test_code_preview_from_served_codes() {
        let doctors: Vec<Value> = serde_json::from_str(&doctors_payload(12)).unwrap();
        let codes = doctors.iter().filter_map(|d| d["code"].as_str());
        assert_eq!(next_code("DOC", codes), "DOC-0013");
    }
}
