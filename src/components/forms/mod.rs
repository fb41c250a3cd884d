mod login_form;
mod register_form;

pub(crate) use login_form::LoginForm;
pub(crate) use register_form::RegisterForm;
