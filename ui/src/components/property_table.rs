use payloads::{Property, PropertyId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub properties: Vec<Property>,
    pub on_edit: Callback<PropertyId>,
    pub on_delete: Callback<Property>,
}

/// Listing rows with per-row edit and delete actions.
#[function_component]
pub fn PropertyTable(props: &Props) -> Html {
    if props.properties.is_empty() {
        return html! {
            <div class="text-center py-12">
                <h5 class="text-lg font-medium text-neutral-900 dark:text-neutral-100">
                    {"No properties found"}
                </h5>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Click \"Add Property\" to create your first property listing."}
                </p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-900">
                    <tr class="text-left text-xs font-medium uppercase tracking-wider
                               text-neutral-500 dark:text-neutral-400">
                        <th class="px-4 py-3">{"ID"}</th>
                        <th class="px-4 py-3">{"Name"}</th>
                        <th class="px-4 py-3 hidden md:table-cell">{"Location"}</th>
                        <th class="px-4 py-3">{"Price"}</th>
                        <th class="px-4 py-3 text-center">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for props.properties.iter().map(|property| html! {
                        <PropertyRow
                            key={property.id.0}
                            property={property.clone()}
                            on_edit={props.on_edit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RowProps {
    property: Property,
    on_edit: Callback<PropertyId>,
    on_delete: Callback<Property>,
}

#[function_component]
fn PropertyRow(props: &RowProps) -> Html {
    let on_edit_click = {
        let id = props.property.id;
        props.on_edit.reform(move |_: MouseEvent| id)
    };
    let on_delete_click = {
        let property = props.property.clone();
        props.on_delete.reform(move |_: MouseEvent| property.clone())
    };

    let property = &props.property;

    html! {
        <tr class="hover:bg-neutral-50 dark:hover:bg-neutral-700/50">
            <td class="px-4 py-3 text-sm">{property.id.to_string()}</td>
            <td class="px-4 py-3 text-sm font-semibold">{&property.name}</td>
            <td class="px-4 py-3 text-sm hidden md:table-cell">{&property.location}</td>
            <td class="px-4 py-3 text-sm">{format_price(property)}</td>
            <td class="px-4 py-3">
                <div class="flex justify-center gap-2 flex-wrap">
                    <button
                        onclick={on_edit_click}
                        class="px-3 py-1 text-sm rounded-md border border-blue-600
                               text-blue-600 hover:bg-blue-600 hover:text-white
                               dark:border-blue-400 dark:text-blue-400"
                    >
                        {"✎ "}<span class="hidden sm:inline">{"Edit"}</span>
                    </button>
                    <button
                        onclick={on_delete_click}
                        class="px-3 py-1 text-sm rounded-md border border-red-600
                               text-red-600 hover:bg-red-600 hover:text-white
                               dark:border-red-400 dark:text-red-400"
                    >
                        {"🗑 "}<span class="hidden sm:inline">{"Delete"}</span>
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Monthly rent as shown in the table, e.g. `$1200/mo`.
pub fn format_price(property: &Property) -> String {
    format!("${}/mo", property.price.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::PropertyDetails;
    use rust_decimal::dec;

    #[test]
    fn price_drops_trailing_zeros() {
        let property = Property {
            id: PropertyId(1),
            details: PropertyDetails {
                name: "Lakeview".into(),
                price: dec!(1200.00),
                location: "Lakeside".into(),
                bedrooms: 2,
                bathrooms: 1,
                image_url: None,
            },
        };
        assert_eq!(format_price(&property), "$1200/mo");
    }
}
