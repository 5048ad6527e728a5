use yew::prelude::*;

use crate::effects::{fill_clip_path, line_fill};

#[derive(Properties, PartialEq)]
pub struct FillLinesProps {
    pub lines: &'static [&'static str],
    /// Scroll progress of the enclosing section, in `[0, 1]`.
    pub progress: f64,
    /// Extra class on the wrapper, used for size and alignment variants.
    #[prop_or_default]
    pub class: Classes,
}

/// Lines that turn from faded to solid one after another as the section
/// scrolls through the viewport.
#[function_component(FillLines)]
pub fn fill_lines(props: &FillLinesProps) -> Html {
    let total = props.lines.len();

    html! {
        <div class={classes!("fill-lines", props.class.clone())}>
            <style>
                {r#"
                .fill-lines .fill-line {
                    position: relative;
                    overflow: hidden;
                }
                .fill-lines .fill-ghost {
                    color: rgba(0, 0, 0, 0.2);
                }
                .fill-lines .fill-solid {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    color: #000;
                    white-space: nowrap;
                    pointer-events: none;
                }
                .fill-lines.centered .fill-line {
                    text-align: center;
                }
                "#}
            </style>
            { for props.lines.iter().enumerate().map(|(index, line)| {
                let fill = line_fill(total, index, props.progress);
                html! {
                    <div class="fill-line" key={index}>
                        <div class="fill-ghost">{ *line }</div>
                        <div class="fill-solid" aria-hidden="true" style={fill_clip_path(fill)}>
                            { *line }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
