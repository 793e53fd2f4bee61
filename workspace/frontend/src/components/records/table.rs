use common::Record;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecordsTableProps {
    pub records: Vec<Record>,
}

/// One row per record, in the order the server returned them.
#[function_component(RecordsTable)]
pub fn records_table(props: &RecordsTableProps) -> Html {
    log::trace!("Rendering {} record rows", props.records.len());

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table id="recordsTable" class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Season"}</th>
                        <th>{"Medicine"}</th>
                        <th class="text-right">{"Quantity"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.records.iter().map(|r| html! {
                        <tr class="hover">
                            <td class="whitespace-nowrap">{r.date.to_string()}</td>
                            <td>{&r.season}</td>
                            <td class="font-medium">{&r.medicine}</td>
                            <td class="font-mono text-right">{r.quantity}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
