use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Element, markup, query_class};
use tablesort::{SortOptions, TableSorter};

fn main() {
    // Set up file logging
    let log_file = File::create("tablesort.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut sorter =
        TableSorter::new(roster(), SortOptions::new()).expect("roster is a table element");

    let name_header = sorter.sortable_headers()[0].clone();
    let joined_header = sorter.sortable_headers()[1].clone();

    println!("initial:");
    print_rows(&sorter);

    sorter.handle_click(&name_header);
    println!("\nafter clicking Name (ascending):");
    print_rows(&sorter);

    sorter.handle_click(&name_header);
    println!("\nafter clicking Name again (descending):");
    print_rows(&sorter);

    sorter.handle_click(&joined_header);
    println!("\nafter clicking Joined (date rule inferred):");
    print_rows(&sorter);

    for notification in sorter.take_notifications() {
        println!("notification: {} at '{}'", notification.name, notification.target);
    }
}

fn roster() -> Element {
    Element::table()
        .child(
            Element::head().child(
                Element::row()
                    .child(Element::header_cell("Name"))
                    .child(Element::header_cell("Joined")),
            ),
        )
        .child(
            Element::body()
                .child(member("John", "2024/03/15"))
                .child(member("Alice", "2023-12-31"))
                .child(totals_row())
                .child(member("Bob", "2024-01-02")),
        )
}

fn member(name: &str, joined: &str) -> Element {
    Element::row()
        .child(Element::cell(name))
        .child(Element::cell(joined))
}

// Pinned: totals stay where they are no matter the sort.
fn totals_row() -> Element {
    Element::row()
        .class(markup::NO_SORT_ROW)
        .child(Element::cell("Total"))
        .child(Element::cell("3 members"))
}

fn print_rows(sorter: &TableSorter) {
    for body in query_class(sorter.element(), markup::TABLE_BODY) {
        for row in body.children() {
            let cells: Vec<String> = row.children().iter().map(Element::text_content).collect();
            println!("  {}", cells.join(" | "));
        }
    }
}
