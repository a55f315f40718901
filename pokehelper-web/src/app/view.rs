use crate::app::handlers::AppHandlers;
use crate::components::breeding::BreedingPanel;
use crate::components::dashboard::DashboardPanel;
use crate::components::dialogs::{PokemonDetails, SaveDataForm, SettingsForm};
use crate::components::header::Header;
use crate::components::items::ItemsPanel;
use crate::components::loading::LoadingOverlay;
use crate::components::modal::Modal;
use crate::components::notice::Notice;
use crate::components::pokedex::PokedexPanel;
use crate::components::tool_forms::{BerryTimerForm, CatchRateForm, EggMoveForm, InvestmentForm};
use crate::components::tools::ToolsPanel;
use pokehelper_core::view::{ModalBody, ModalView, TabBody};
use pokehelper_core::ViewTree;
use yew::prelude::*;

/// Render the whole interface for one view snapshot.
pub fn render_app(view: &ViewTree, handlers: &AppHandlers) -> Html {
    let panels = view.panels.iter().map(|panel| {
        let body = if panel.active {
            render_body(&view.body, handlers)
        } else {
            Html::default()
        };
        html! {
            <section
                id={panel.tab.slug()}
                class={classes!("tab-content", panel.active.then_some("active"))}
                hidden={!panel.active}
                aria-label={panel.tab.label()}
            >
                { body }
            </section>
        }
    });

    html! {
        <div class={classes!("app", format!("theme-{}", view.theme.as_str()))}>
            <Header
                nav={view.nav.clone()}
                theme={view.theme}
                on_show_tab={handlers.show_tab.clone()}
                on_toggle_theme={handlers.toggle_theme.clone()}
                on_open_settings={handlers.open_settings.clone()}
                on_open_save={handlers.open_save.clone()}
            />
            if let Some(notice) = view.notice.clone() {
                <Notice {notice} on_dismiss={handlers.dismiss_notice.clone()} />
            }
            <main id="main" role="main">
                { for panels }
            </main>
            { view.modal.as_ref().map(|modal| render_modal(modal, handlers)).unwrap_or_default() }
            <LoadingOverlay active={view.loading} on_cancel={handlers.cancel_tasks.clone()} />
        </div>
    }
}

fn render_body(body: &TabBody, handlers: &AppHandlers) -> Html {
    match body {
        TabBody::Dashboard(stats) => html! { <DashboardPanel stats={*stats} /> },
        TabBody::Items(cards) => html! {
            <ItemsPanel
                cards={cards.clone()}
                on_search={handlers.search.clone()}
                on_watch={handlers.watch.clone()}
            />
        },
        TabBody::Breeding {
            species,
            natures,
            result,
            saved,
        } => html! {
            <BreedingPanel
                species={species.clone()}
                natures={natures.clone()}
                result={result.clone()}
                saved={saved.clone()}
                on_plan={handlers.plan_breeding.clone()}
                on_save={handlers.save_breeding.clone()}
            />
        },
        TabBody::Pokedex(cards) => html! {
            <PokedexPanel
                cards={cards.clone()}
                on_open={handlers.open_pokemon.clone()}
                on_toggle_caught={handlers.toggle_caught.clone()}
            />
        },
        TabBody::Tools(tools) => html! {
            <ToolsPanel tools={tools.clone()} on_open={handlers.open_tool.clone()} />
        },
    }
}

fn render_modal(modal: &ModalView, handlers: &AppHandlers) -> Html {
    let content = match &modal.body {
        ModalBody::CatchRate {
            pokemon,
            statuses,
            balls,
            result,
        } => html! {
            <CatchRateForm
                pokemon={pokemon.clone()}
                statuses={*statuses}
                balls={*balls}
                result={result.clone()}
                on_calculate={handlers.calculate_catch.clone()}
            />
        },
        ModalBody::EggMoves {
            targets,
            moves,
            result,
        } => html! {
            <EggMoveForm
                targets={targets.clone()}
                moves={moves.clone()}
                result={result.clone()}
                on_find={handlers.find_egg_move.clone()}
            />
        },
        ModalBody::BerryTimer {
            berries,
            timers,
            message,
        } => html! {
            <BerryTimerForm
                berries={berries.clone()}
                timers={timers.clone()}
                message={message.clone()}
                on_plant={handlers.plant_berry.clone()}
            />
        },
        ModalBody::Investments { rows, message } => html! {
            <InvestmentForm
                rows={rows.clone()}
                message={message.clone()}
                on_add={handlers.add_investment.clone()}
            />
        },
        ModalBody::PokemonDetails {
            types,
            egg_groups,
            stats,
            caught,
        } => html! {
            <PokemonDetails
                name={AttrValue::from(modal.title.clone())}
                types={types.clone()}
                egg_groups={egg_groups.clone()}
                stats={stats.clone()}
                caught={*caught}
                on_toggle_caught={handlers.toggle_caught.clone()}
            />
        },
        ModalBody::Settings { theme, auto_save } => html! {
            <SettingsForm
                theme={*theme}
                auto_save={*auto_save}
                on_set_theme={handlers.set_theme.clone()}
                on_set_auto_save={handlers.set_auto_save.clone()}
            />
        },
        ModalBody::SaveData { export } => html! {
            <SaveDataForm
                export={export.clone()}
                on_import={handlers.import_data.clone()}
                on_reset={handlers.reset_data.clone()}
            />
        },
    };

    // Keyed by title so switching modal content resets form state.
    html! {
        <Modal
            key={modal.title.clone()}
            open=true
            title={AttrValue::from(modal.title.clone())}
            on_close={handlers.close_modal.clone()}
        >
            { content }
        </Modal>
    }
}
