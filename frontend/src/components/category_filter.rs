use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub categories: &'static [&'static str],
    pub selected: &'static str,
    pub on_select: Callback<&'static str>,
}

/// Row of pill buttons; the selected one is filled with the brand color.
#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    html! {
        <div class="category-filter">
            <style>
                {r#"
                .category-filter {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .category-filter button {
                    border-radius: 999px;
                    padding: 0.75rem 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    background: #fff;
                    color: #000;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .category-filter button:hover {
                    border-color: rgba(255, 69, 0, 0.3);
                }
                .category-filter button.selected {
                    background: var(--brand-primary);
                    border-color: var(--brand-primary);
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(255, 69, 0, 0.25);
                }
                "#}
            </style>
            { for props.categories.iter().map(|category| {
                let category: &'static str = *category;
                let onclick = props.on_select.reform(move |_: MouseEvent| category);
                html! {
                    <button
                        class={classes!((props.selected == category).then_some("selected"))}
                        onclick={onclick}
                    >
                        { category }
                    </button>
                }
            }) }
        </div>
    }
}
