//! Signup and sign-in submission commands
//! 注册与登录提交命令

use anyhow::Context;
use tokio::task::spawn_blocking;
use tracing::{info_span, Instrument, Span};

use cu_app::{prepare_signup, verify_signin, AuthFlowError};
use cu_core::security::SecretString;
use cu_core::signup::SignupForm;

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{Reply, SigninRequest, ValidationResultDto};
use crate::commands::map_err;
use crate::presenter::present;

/// Submit the signup form (`signup {"firstName": ...}`).
pub async fn submit_signup(runtime: &AppRuntime, form_json: &str) -> Reply {
    let span = info_span!("command.auth.submit_signup");
    async {
        let form = match serde_json::from_str::<SignupForm>(form_json)
            .context("Invalid signup form")
        {
            Ok(form) => form,
            Err(err) => return Reply::Error { message: map_err(err) },
        };

        // Hash without holding the controller.
        let hasher = runtime.controller().await.password_hasher();
        let parent = Span::current();
        let prepared = match spawn_blocking(move || {
            parent.in_scope(|| prepare_signup(form, hasher.as_ref()))
        })
        .await
        .context("Signup task failed")
        {
            Ok(prepared) => prepared,
            Err(err) => return Reply::Error { message: map_err(err) },
        };

        let mut controller = runtime.controller().await;
        let (navigation, validation, alert) = match prepared {
            Ok(record) => {
                let accepted = controller.accept_signup(record);
                let profile = accepted.record.profile().clone();
                runtime.refresh_avatar(profile.clone());
                (
                    Some(accepted.navigation),
                    Some(ValidationResultDto::valid(profile)),
                    None,
                )
            }
            Err(AuthFlowError::Validation(err)) => (
                None,
                Some(ValidationResultDto::invalid(err.message())),
                Some(err.message()),
            ),
            Err(err) => (None, None, Some(err.user_message())),
        };

        Reply::Signup {
            validation,
            view: present(
                &controller,
                runtime.settings(),
                navigation.as_ref(),
                alert,
                runtime.avatar_url(),
            ),
        }
    }
    .instrument(span)
    .await
}

/// Submit the sign-in form (`signin {"email": ..., "password": ...}`).
pub async fn submit_signin(runtime: &AppRuntime, request_json: &str) -> Reply {
    let span = info_span!("command.auth.submit_signin");
    async {
        let request = match serde_json::from_str::<SigninRequest>(request_json)
            .context("Invalid sign-in form")
        {
            Ok(request) => request,
            Err(err) => return Reply::Error { message: map_err(err) },
        };
        let password = SecretString::new(request.password);
        let email = request.email.trim().to_string();

        let (record, hasher) = {
            let controller = runtime.controller().await;
            (controller.current_user(), controller.password_hasher())
        };
        let parent = Span::current();
        let verified = match spawn_blocking(move || {
            parent.in_scope(|| verify_signin(record, &email, &password, hasher.as_ref()))
        })
        .await
        .context("Sign-in task failed")
        {
            Ok(verified) => verified,
            Err(err) => return Reply::Error { message: map_err(err) },
        };

        let mut controller = runtime.controller().await;
        let (navigation, alert) = match verified {
            Ok(verified) => {
                runtime.refresh_avatar(verified.record().profile().clone());
                (Some(controller.complete_signin(verified)), None)
            }
            Err(err) => (None, Some(err.user_message())),
        };

        Reply::View(present(
            &controller,
            runtime.settings(),
            navigation.as_ref(),
            alert,
            runtime.avatar_url(),
        ))
    }
    .instrument(span)
    .await
}
