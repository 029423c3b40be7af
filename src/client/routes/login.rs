use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::backend::SignUp;

use crate::{
    client::{
        components::Page,
        controller::notify,
        router::Route,
        service::AuthService,
        store::{
            session::SessionState,
            toast::{Notice, ToastState},
        },
        supabase::SupabaseClient,
    },
    model::user::{Credentials, Registration},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

#[component]
pub fn Login() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    let mut mode = use_signal(|| Mode::SignIn);

    use_effect(move || {
        if session.read().user.is_some() {
            navigator.replace(Route::Home {});
        }
    });

    let current = mode();

    rsx!(
        Title { "Acceso | Kalendo" }
        Page { class: "flex justify-center",
            div { class: "card bg-base-200 shadow-sm w-full max-w-md",
                div { class: "card-body gap-4",
                    div { role: "tablist", class: "tabs tabs-boxed",
                        button {
                            role: "tab",
                            class: if current == Mode::SignIn { "tab tab-active" } else { "tab" },
                            onclick: move |_| mode.set(Mode::SignIn),
                            "Iniciar sesión"
                        }
                        button {
                            role: "tab",
                            class: if current == Mode::Register { "tab tab-active" } else { "tab" },
                            onclick: move |_| mode.set(Mode::Register),
                            "Crear cuenta"
                        }
                    }
                    {match current {
                        Mode::SignIn => rsx!(SignInForm {}),
                        Mode::Register => rsx!(RegisterForm { on_pending: move |_| mode.set(Mode::SignIn) }),
                    }}
                }
            }
        }
    )
}

#[component]
fn SignInForm() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let toasts = use_context::<Signal<ToastState>>();
    let backend = use_context::<SupabaseClient>();

    let mut credentials = use_signal(Credentials::default);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let backend = backend.clone();
        let input = credentials();
        spawn(async move {
            match AuthService::new(&backend).sign_in(&input).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.id);
                    session.set(SessionState::signed_in(user));
                    notify(toasts, Notice::success("Sesión iniciada."));
                }
                Err(err) => {
                    tracing::warn!("Sign-in failed: {}", err);
                    notify(toasts, Notice::from(&err));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            input {
                class: "input w-full",
                r#type: "email",
                placeholder: "Correo electrónico",
                value: "{credentials.read().email}",
                oninput: move |evt| credentials.write().email = evt.value(),
            }
            input {
                class: "input w-full",
                r#type: "password",
                placeholder: "Contraseña",
                value: "{credentials.read().password}",
                oninput: move |evt| credentials.write().password = evt.value(),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Entrando..." } else { "Entrar" }
            }
        }
    )
}

#[component]
fn RegisterForm(on_pending: EventHandler<()>) -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let toasts = use_context::<Signal<ToastState>>();
    let backend = use_context::<SupabaseClient>();

    let mut registration = use_signal(Registration::default);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let backend = backend.clone();
        let input = registration();
        spawn(async move {
            match AuthService::new(&backend).register(&input).await {
                Ok(registered) => {
                    if !registered.profile_saved {
                        notify(
                            toasts,
                            Notice::error("Tu cuenta se creó, pero no se pudo guardar tu perfil."),
                        );
                    }
                    match registered.sign_up {
                        SignUp::SignedIn(user) => {
                            tracing::info!("Registered and signed in as {}", user.id);
                            session.set(SessionState::signed_in(user));
                            notify(toasts, Notice::success("Cuenta creada."));
                        }
                        SignUp::PendingConfirmation(user) => {
                            tracing::info!("Registered {}, awaiting confirmation", user.id);
                            notify(
                                toasts,
                                Notice::success("Revisa tu correo para confirmar la cuenta."),
                            );
                            registration.set(Registration::default());
                            on_pending.call(());
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!("Registration failed: {}", err);
                    notify(toasts, Notice::from(&err));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            input {
                class: "input w-full",
                placeholder: "Nombre",
                value: "{registration.read().name}",
                oninput: move |evt| registration.write().name = evt.value(),
            }
            input {
                class: "input w-full",
                r#type: "email",
                placeholder: "Correo electrónico",
                value: "{registration.read().email}",
                oninput: move |evt| registration.write().email = evt.value(),
            }
            input {
                class: "input w-full",
                r#type: "password",
                placeholder: "Contraseña",
                value: "{registration.read().password}",
                oninput: move |evt| registration.write().password = evt.value(),
            }
            input {
                class: "input w-full",
                r#type: "password",
                placeholder: "Repite la contraseña",
                value: "{registration.read().confirmation}",
                oninput: move |evt| registration.write().confirmation = evt.value(),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Creando cuenta..." } else { "Crear cuenta" }
            }
        }
    )
}
