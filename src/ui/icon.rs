use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MAXIMIZE: &str = "maximize";
    pub const MENU: &str = "menu";
    pub const MESSAGE: &str = "message-square";
    pub const PHONE: &str = "phone";
    pub const SEND: &str = "send";
    pub const USER: &str = "user";
    pub const VOLUME: &str = "volume-2";
    pub const VOLUME_OFF: &str = "volume-x";
    pub const WHATSAPP: &str = "whatsapp";
    pub const X: &str = "x";
}
