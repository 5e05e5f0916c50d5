mod dashboard_page;
mod landing_page;
mod login_page;
mod recipe_detail_page;
mod recipe_form_page;
mod signup_page;

use gpui::{
    AnyView, AppContext, Context, Entity, EventEmitter, IntoElement, ParentElement, Render, Styled,
    Window, div,
};
use gpui_component::{
    IconName, Side,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};
use ladle_bridge::notification::ToastMessage;
use ladle_bridge::signup::SignUpOutcome;

use crate::BackendBridge;
use crate::components::{dialog_layer::DialogLayer, toast_stack::ToastStack};
use crate::entities::{
    AuthRequiredEvent, DataEntities, recipes_entity::RecipeStoreEvent, toasts_entity::ToastsEntity,
};
use crate::views::{
    dashboard_page::DashboardPage,
    landing_page::LandingPage,
    login_page::LoginPage,
    recipe_detail_page::RecipeDetailPage,
    recipe_form_page::{FormMode, RecipeFormPage},
    signup_page::SignupPage,
};

/// All navigable screens of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard,
    RecipeDetail(String),
    AddRecipe,
    EditRecipe(String),
}

impl Page {
    /// Screens that bounce to the login page without a session.
    fn requires_auth(&self) -> bool {
        matches!(
            self,
            Page::Dashboard | Page::RecipeDetail(_) | Page::AddRecipe | Page::EditRecipe(_)
        )
    }
}

/// Emitted by page views that want the root view to navigate somewhere.
#[derive(Debug, Clone)]
pub struct NavigateEvent(pub Page);

pub struct FrontendUi {
    data: DataEntities,
    active_page: Page,
    active_page_view: AnyView,
    toast_stack: Entity<ToastStack>,
    dialog_layer: Entity<DialogLayer>,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let toast_stack = cx.new(|cx| ToastStack::new(data, cx));
        let dialog_layer = cx.new(|cx| DialogLayer::new(data, cx));

        cx.observe_in(&data.session.clone(), window, |this, _, window, cx| {
            this.sync_auth_state(window, cx);
        })
        .detach();

        cx.subscribe_in(
            &data.session.clone(),
            window,
            |this, _, _: &AuthRequiredEvent, window, cx| {
                this.change_page(Page::Login, window, cx);
            },
        )
        .detach();

        cx.subscribe_in(
            &data.recipes.clone(),
            window,
            |this, _, event: &RecipeStoreEvent, window, cx| match event {
                RecipeStoreEvent::Saved { id } => {
                    this.change_page(Page::RecipeDetail(id.clone()), window, cx);
                }
                RecipeStoreEvent::Deleted { .. } => {
                    if matches!(
                        this.active_page,
                        Page::RecipeDetail(_) | Page::EditRecipe(_)
                    ) {
                        this.change_page(Page::Dashboard, window, cx);
                    }
                }
                RecipeStoreEvent::SaveFailed(_) => {}
            },
        )
        .detach();

        cx.observe_in(&data.signup.clone(), window, |this, _, window, cx| {
            let outcome = this.data.signup.read(cx).outcome.clone();
            if matches!(outcome, Some(SignUpOutcome::Success)) && this.active_page == Page::Signup {
                ToastsEntity::push(
                    &this.data.toasts,
                    ToastMessage::success("Account created").body("You can sign in now."),
                    cx,
                );
                this.change_page(Page::Login, window, cx);
            }
        })
        .detach();

        let initial_view = cx.new(|cx| LandingPage::new(data, window, cx));
        Self::hook_navigation(&initial_view, window, cx);

        Self {
            data: data.clone(),
            active_page: Page::Landing,
            active_page_view: initial_view.into(),
            toast_stack,
            dialog_layer,
        }
    }

    fn hook_navigation<T>(entity: &Entity<T>, window: &mut Window, cx: &mut Context<Self>)
    where
        T: EventEmitter<NavigateEvent> + 'static,
    {
        cx.subscribe_in(entity, window, |this, _, event: &NavigateEvent, window, cx| {
            this.change_page(event.0.clone(), window, cx);
        })
        .detach();
    }

    pub fn change_page(&mut self, page: Page, window: &mut Window, cx: &mut Context<Self>) {
        if self.active_page == page {
            return;
        }

        let new_page: AnyView = match &page {
            Page::Landing => {
                let view = cx.new(|cx| LandingPage::new(&self.data, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
            Page::Login => {
                let view = cx.new(|cx| LoginPage::new(&self.data, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
            Page::Signup => {
                let view = cx.new(|cx| SignupPage::new(&self.data, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
            Page::Dashboard => {
                let view = cx.new(|cx| DashboardPage::new(&self.data, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
            Page::RecipeDetail(id) => {
                let id = id.clone();
                let view = cx.new(|cx| RecipeDetailPage::new(&self.data, id, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
            Page::AddRecipe => {
                let view = cx.new(|cx| RecipeFormPage::new(&self.data, FormMode::Create, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
            Page::EditRecipe(id) => {
                let mode = FormMode::Edit(id.clone());
                let view = cx.new(|cx| RecipeFormPage::new(&self.data, mode, window, cx));
                Self::hook_navigation(&view, window, cx);
                view.into()
            }
        };

        self.active_page = page;
        self.active_page_view = new_page;
        cx.notify();
    }

    /// Redirects the way the routes expect: protected pages need a session,
    /// the auth pages bounce once a session exists. Runs on every session
    /// change and never while the initial resolution is pending.
    fn sync_auth_state(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let session = self.data.session.read(cx).session.clone();
        if !session.is_loading {
            if session.is_authenticated() {
                if matches!(self.active_page, Page::Login | Page::Signup) {
                    self.change_page(Page::Dashboard, window, cx);
                }
            } else if self.active_page.requires_auth() {
                self.change_page(Page::Login, window, cx);
            }
        }
        cx.notify();
    }
}

impl Render for FrontendUi {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.data.session.read(cx).session.clone();
        let on_page_change = |page: Page| {
            cx.listener(move |this: &mut Self, _, window, cx| {
                this.change_page(page.clone(), window, cx);
            })
        };

        let mut browse_menu = SidebarMenu::new()
            .child(
                SidebarMenuItem::new("Home")
                    .active(self.active_page == Page::Landing)
                    .on_click(on_page_change(Page::Landing)),
            )
            .child(
                SidebarMenuItem::new("Recipes")
                    .active(self.active_page == Page::Dashboard)
                    .icon(IconName::LayoutDashboard)
                    .on_click(on_page_change(Page::Dashboard)),
            );
        if session.is_authenticated() {
            browse_menu = browse_menu.child(
                SidebarMenuItem::new("Add recipe")
                    .active(self.active_page == Page::AddRecipe)
                    .icon(IconName::Plus)
                    .on_click(on_page_change(Page::AddRecipe)),
            );
        }

        let account_menu = if session.is_authenticated() {
            SidebarMenu::new().child(SidebarMenuItem::new("Sign out").on_click(cx.listener(
                |_, _, _, cx| {
                    let bridge = cx.global::<BackendBridge>().clone();
                    cx.spawn(async move |_, _| {
                        bridge.sign_out().await;
                    })
                    .detach();
                },
            )))
        } else {
            SidebarMenu::new()
                .child(
                    SidebarMenuItem::new("Sign in")
                        .active(self.active_page == Page::Login)
                        .on_click(on_page_change(Page::Login)),
                )
                .child(
                    SidebarMenuItem::new("Create account")
                        .active(self.active_page == Page::Signup)
                        .on_click(on_page_change(Page::Signup)),
                )
        };

        div()
            .relative()
            .flex()
            .size_full()
            .child(
                Sidebar::new(Side::Left)
                    .header(SidebarHeader::new().child("Ladle"))
                    .child(SidebarGroup::new("Browse").child(browse_menu))
                    .child(SidebarGroup::new("Account").child(account_menu)),
            )
            .child(div().p_5().size_full().child(self.active_page_view.clone()))
            .child(self.dialog_layer.clone())
            .child(self.toast_stack.clone())
    }
}
