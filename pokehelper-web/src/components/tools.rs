use pokehelper_core::view::ToolButton;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub tools: Vec<ToolButton>,
    pub on_open: Callback<String>,
}

#[function_component(ToolsPanel)]
pub fn tools_panel(p: &Props) -> Html {
    html! {
        <div class="tools-grid">
            { for p.tools.iter().map(|tool| {
                let slug = tool.slug;
                let cb = p.on_open.clone();
                let onclick = Callback::from(move |_| cb.emit(slug.to_string()));
                html! {
                    <div class="tool-card">
                        <h3>{ tool.title }</h3>
                        <p>{ tool.blurb }</p>
                        <button type="button" class="tool-btn" data-tool={slug} {onclick}>{ "Open" }</button>
                    </div>
                }
            }) }
        </div>
    }
}
