use hbnb::filter::CountryFilter;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountryFilterProps {
    pub options: Vec<String>,
    pub selected: CountryFilter,
    pub on_change: Callback<CountryFilter>,
}

#[function_component(CountryFilterSelect)]
pub fn country_filter_select(props: &CountryFilterProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(CountryFilter::from_value(&select.value()));
            }
        })
    };

    html! {
        <section class="filter">
            <label for="country-filter">{ "Country:" }</label>
            <select id="country-filter" {onchange}>
                { for props.options.iter().map(|option| html! {
                    <option
                        value={option.clone()}
                        selected={option.as_str() == props.selected.value()}
                    >
                        { option }
                    </option>
                }) }
            </select>
        </section>
    }
}
