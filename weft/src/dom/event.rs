use wasm_bindgen::JsCast;

pub trait DomEvent: Sized {
    fn event_type() -> Ev;
    fn from_dom(ev: web_sys::Event) -> Option<Self>;
}

// ClickEvent.

pub struct ClickEvent(pub web_sys::MouseEvent);

impl std::ops::Deref for ClickEvent {
    type Target = web_sys::MouseEvent;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DomEvent for ClickEvent {
    fn event_type() -> Ev {
        Ev::Click
    }

    fn from_dom(ev: web_sys::Event) -> Option<Self> {
        ev.dyn_into().ok().map(Self)
    }
}

// HashChangeEvent.

/// Fired on the window whenever the location hash changes.
pub struct HashChangeEvent(pub web_sys::HashChangeEvent);

impl std::ops::Deref for HashChangeEvent {
    type Target = web_sys::HashChangeEvent;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DomEvent for HashChangeEvent {
    fn event_type() -> Ev {
        Ev::HashChange
    }

    fn from_dom(ev: web_sys::Event) -> Option<Self> {
        ev.dyn_into().ok().map(Self)
    }
}

make_str_enum! {
    Ev {
        Error = "error",
        Load = "load",
        DomContentLoaded = "DOMContentLoaded",
        HashChange = "hashchange",
        PopState = "popstate",
        Focus = "focus",
        Blur = "blur",
        Resize = "resize",
        Scroll = "scroll",
        KeyDown = "keydown",
        KeyUp = "keyup",
        Click = "click",
        DblClick = "dblclick",
        MouseEnter = "mouseenter",
        MouseLeave = "mouseleave",
        MouseOver = "mouseover",
        MouseOut = "mouseout",
        Change = "change",
        Input = "input",
        Submit = "submit",
    }
}
