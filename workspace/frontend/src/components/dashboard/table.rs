use controller::PredictionRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionTableProps {
    pub rows: Vec<PredictionRow>,
    #[prop_or_default]
    pub notes: Option<String>,
}

#[function_component(PredictionTable)]
pub fn prediction_table(props: &PredictionTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table id="predictionTable" class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Medicine"}</th>
                        <th class="text-right">{"Predicted Quantity"}</th>
                        <th class="text-right">{"Last Total"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| {
                        let [medicine, predicted, last_total, action] = row.cells();
                        html! {
                            <tr class="hover">
                                <td class="font-medium">{medicine}</td>
                                <td class="font-mono text-right">{predicted}</td>
                                <td class="font-mono text-right">{last_total}</td>
                                <td>{action}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            if let Some(notes) = &props.notes {
                <p class="text-sm text-base-content/70 mt-2">{notes}</p>
            }
        </div>
    }
}
