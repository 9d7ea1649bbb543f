//! List command implementation.

use northwind_query::{Parameter, registry};

use crate::style;

pub fn run() {
    let columns = ["Name", "Category", "Title", "Parameter", "Description"];
    let rows: Vec<Vec<String>> = registry::routines()
        .iter()
        .map(|routine| {
            let parameter = match routine.parameter {
                Parameter::None => "-",
                Parameter::Threshold => "threshold",
            };
            vec![
                routine.name.to_string(),
                routine.category.to_string(),
                routine.title.to_string(),
                parameter.to_string(),
                routine.description.to_string(),
            ]
        })
        .collect();

    style::print_list_table(&columns, &rows, "routine");
    style::print_run_hint();
}
