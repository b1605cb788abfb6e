use crate::config::FrontendConfig;
use crate::error::FetchError;
use crate::hover::{HoverState, Hoverable, PointerEvent};
use crate::language::{nav_items, Language};
use crate::popular::{PopularState, Status};
use crate::repository::{card_models, parse_search_response, RepoCardModel, Repository};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

const ACTIVE_NAV_COLOR: &str = "color: rgb(187, 46, 31)";

async fn fetch_popular_repos(
    config: &FrontendConfig,
    language: Language,
) -> Result<Vec<Repository>, FetchError> {
    let url = config.search_url(language);

    let response = Request::get(url.as_str())
        .send()
        .await
        .map_err(|error| FetchError::Transport(error.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|error| FetchError::Transport(error.to_string()))?;

    parse_search_response(status, &status_text, &body)
}

#[derive(Properties, PartialEq)]
pub struct WithHoverProps<P: PartialEq> {
    pub inner: P,
}

/// Wraps `C` in a container tracking pointer enter/leave and passes the flag
/// through `C`'s [`Hoverable`] props.
#[function_component(WithHover)]
pub fn with_hover<C>(props: &WithHoverProps<C::Properties>) -> Html
where
    C: BaseComponent,
    C::Properties: Hoverable,
{
    let hover = use_state(HoverState::default);

    let onmouseenter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set((*hover).apply(PointerEvent::Enter)))
    };

    let onmouseleave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set((*hover).apply(PointerEvent::Leave)))
    };

    let inner = props.inner.clone().with_hover(*hover);

    html! {
        <div
            class="hover-container"
            data-hover-input={<C::Properties as Hoverable>::HOVER_INPUT}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <C ..inner />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub hovering: Option<bool>,
    #[prop_or_default]
    pub children: Html,
}

impl Hoverable for TooltipProps {
    fn hover_input(&mut self) -> &mut Option<bool> {
        &mut self.hovering
    }
}

#[function_component(Tooltip)]
fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <div class="tooltip-container">
            if props.hovering.unwrap_or(false) {
                <div class="tooltip" role="tooltip">{props.text.clone()}</div>
            }
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LanguageNavProps {
    selected: Language,
    on_select: Callback<Language>,
}

#[function_component(LanguageNav)]
fn language_nav(props: &LanguageNavProps) -> Html {
    html! {
        <ul class="flex-center">
            { for nav_items(props.selected).into_iter().map(|item| {
                let on_select = props.on_select.clone();
                let language = item.language;
                html! {
                    <li key={language.as_str()}>
                        <button
                            class={classes!("btn-clear", "nav-link", item.active.then_some("active"))}
                            style={item.active.then_some(ACTIVE_NAV_COLOR)}
                            aria-pressed={item.active.to_string()}
                            onclick={Callback::from(move |_| on_select.emit(language))}
                        >
                            {language.as_str()}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RepoCardProps {
    pub card: RepoCardModel,
    #[prop_or_default]
    pub hovering: Option<bool>,
}

impl Hoverable for RepoCardProps {
    fn hover_input(&mut self) -> &mut Option<bool> {
        &mut self.hovering
    }
}

#[function_component(RepoCard)]
fn repo_card(props: &RepoCardProps) -> Html {
    let card = &props.card;
    let hovering = props.hovering.unwrap_or(false);

    html! {
        <div class={classes!("card", "bg-light", hovering.then_some("is-hovering"))}>
            <h4 class="header-lg center-text">{card.heading.clone()}</h4>
            <img class="avatar" src={card.avatar_url.clone()} alt={card.avatar_alt()} loading="lazy" />
            <h2 class="center-text">
                <a class="link" href={card.html_url.clone()} target="_blank" rel="noopener noreferrer">
                    {card.login.clone()}
                </a>
            </h2>
            <ul class="card-list">
                <li>
                    <WithHover<Tooltip>
                        inner={TooltipProps {
                            text: AttrValue::from("Github username"),
                            hovering: None,
                            children: html! {
                                <>
                                    <span class="icon" aria-hidden="true">{"👤"}</span>
                                    <a href={card.profile_url.clone()}>{card.login.clone()}</a>
                                </>
                            },
                        }}
                    />
                </li>
                <li>
                    <span class="icon" aria-hidden="true">{"★"}</span>
                    {card.stars.clone()}
                </li>
                <li>
                    <span class="icon" aria-hidden="true">{"⑂"}</span>
                    {card.forks.clone()}
                </li>
                <li>
                    <span class="icon" aria-hidden="true">{"⚠"}</span>
                    {card.open_issues.clone()}
                </li>
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReposGridProps {
    repos: Rc<Vec<Repository>>,
}

#[function_component(ReposGrid)]
fn repos_grid(props: &ReposGridProps) -> Html {
    html! {
        <ul class="grid space-around">
            { for card_models(&props.repos).into_iter().map(|card| html! {
                <li key={card.key.clone()}>
                    <WithHover<RepoCard> inner={RepoCardProps { card, hovering: None }} />
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct PopularProps {
    config: Rc<FrontendConfig>,
}

#[function_component(Popular)]
fn popular(props: &PopularProps) -> Html {
    let log_level = props.config.log_level;
    let state = use_mut_ref(move || PopularState::new(log_level));
    let rerender = use_force_update();

    let on_select = {
        let state = state.clone();
        let rerender = rerender.clone();
        let config = props.config.clone();
        Callback::from(move |language: Language| {
            let pending = state.borrow_mut().select(language);
            rerender.force_update();

            let Some(language) = pending else {
                return;
            };

            let state = state.clone();
            let rerender = rerender.clone();
            let config = config.clone();
            spawn_local(async move {
                let outcome = fetch_popular_repos(&config, language).await;
                state.borrow_mut().resolve(language, outcome);
                rerender.force_update();
            });
        })
    };

    {
        let on_select = on_select.clone();
        use_effect_with((), move |_| {
            on_select.emit(Language::default());
            || ()
        });
    }

    let (selected, status) = {
        let view = state.borrow();
        (view.selected(), view.status())
    };

    html! {
        <>
            <LanguageNav selected={selected} on_select={on_select} />
            {
                match status {
                    Status::Loading => html! { <p class="center-text loading">{"Fetching Repos"}</p> },
                    Status::Failed(message) => html! { <p class="center-text error">{message}</p> },
                    Status::Ready(repos) => html! { <ReposGrid repos={repos} /> },
                }
            }
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| FrontendConfig::from_build_env());

    html! {
        <div class="container">
            <Popular config={config} />
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
