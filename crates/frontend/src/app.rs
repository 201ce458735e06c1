use crate::shared::icons;
use crate::shared::navigation::{use_navigation, NavigationProvider};
use crate::shared::settings::{use_settings, SettingsProvider};
use crate::shared::tab_bar::{NavLink, TabBar};
use leptos::prelude::*;
use tabs_contracts::shared::tab_bar::{HiddenTabs, MatchMode, TabSetConfig};
use thaw::*;

const TAB_SETS: &str = include_str!("../static/tab_sets.json");

/// Whether `path` is `base_path` itself or one of its sub-paths.
fn is_under(base_path: &str, path: &str) -> bool {
    match path.strip_prefix(base_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Hidden set of a bar: its configured names plus, optionally, every tab with params.
fn hidden_for(config: &TabSetConfig, hide_param_tabs: bool) -> HiddenTabs {
    let configured = config.hidden.iter().map(|name| Some(name.to_string()));
    let param_tabs = config
        .items
        .iter()
        .map(|item| (hide_param_tabs && item.has_params).then(|| item.name.clone()));

    HiddenTabs::from_optional(configured.chain(param_tabs))
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <NavigationProvider>
            <SettingsProvider>
                <Explorer />
            </SettingsProvider>
        </NavigationProvider>
    }
}

#[component]
fn Explorer() -> impl IntoView {
    let configs = match TabSetConfig::list_from_json(TAB_SETS) {
        Ok(configs) => configs,
        Err(err) => {
            log::error!("Failed to load tab sets: {:#}", err);
            return view! { <div class="error">{format!("{:#}", err)}</div> }.into_any();
        }
    };
    log::info!("Loaded {} tab sets", configs.len());

    let nav = use_navigation();
    let settings = use_settings();
    let current_path = nav.current_path();
    let configs = StoredValue::new(configs);

    // Paths outside every bar go to the first one
    Effect::new(move |_| {
        let current = current_path.get();
        let (known, fallback) = configs.with_value(|configs| {
            (
                configs.iter().any(|config| is_under(&config.base_path, &current)),
                configs.first().map(|config| config.base_path.clone()),
            )
        });
        if let (false, Some(fallback)) = (known, fallback) {
            nav.redirect(fallback);
        }
    });

    let active = Memo::new(move |_| {
        current_path.with(|current| {
            configs.with_value(|configs| {
                configs
                    .iter()
                    .find(|config| is_under(&config.base_path, current))
                    .cloned()
            })
        })
    });

    let sections = configs.with_value(|configs| {
        configs
            .iter()
            .map(|config| config.base_path.clone())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="explorer">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <nav class="ui--Menu ui menu">
                    {sections
                        .into_iter()
                        .map(|base_path| {
                            let label = base_path.trim_start_matches('/').to_string();
                            view! {
                                <NavLink to=base_path match_mode=MatchMode::Prefix>
                                    {icons::icon("compass")}
                                    <span>{label}</span>
                                </NavLink>
                            }
                        })
                        .collect_view()}
                </nav>
                <Space>
                    <Switch checked=settings.sequence label="Sequence mode"/>
                    <Switch checked=settings.hide_param_tabs label="Hide tabs with params"/>
                </Space>
            </Flex>
            {move || {
                active
                    .get()
                    .map(|config| {
                        let base_path = config.base_path.clone();
                        let items = config.items.clone();
                        let configured_sequence = config.is_sequence;
                        let hidden = Signal::derive(move || {
                            hidden_for(&config, settings.hide_param_tabs.get())
                        });
                        let is_sequence = Signal::derive(move || {
                            configured_sequence || settings.sequence.get()
                        });
                        view! {
                            <TabBar
                                base_path=base_path
                                items=items
                                hidden=hidden
                                is_sequence=is_sequence
                                class="explorer--tabs"
                            />
                        }
                    })
            }}
            <section class="explorer--page">
                <code>{move || current_path.get()}</code>
            </section>
        </div>
    }
    .into_any()
}
