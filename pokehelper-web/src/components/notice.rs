use pokehelper_core::view::NoticeView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notice: NoticeView,
    pub on_dismiss: Callback<()>,
}

#[function_component(Notice)]
pub fn notice(p: &Props) -> Html {
    let dismiss = {
        let cb = p.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let class = classes!(
        "notice",
        if p.notice.error { "notice--error" } else { "notice--success" }
    );
    html! {
        <div {class} role={if p.notice.error { "alert" } else { "status" }} aria-live="polite">
            <strong>{ p.notice.heading }</strong>
            <p>{ p.notice.message.clone() }</p>
            <button type="button" class="notice__dismiss" aria-label="Dismiss" onclick={dismiss}>{"×"}</button>
        </div>
    }
}
