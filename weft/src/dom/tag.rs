make_str_enum! {
    Tag {
        A = "a",
        Article = "article",
        Aside = "aside",
        B = "b",
        Br = "br",
        Button = "button",
        Code = "code",
        Dd = "dd",
        Div = "div",
        Dl = "dl",
        Dt = "dt",
        Em = "em",
        Footer = "footer",
        H1 = "h1",
        H2 = "h2",
        H3 = "h3",
        H4 = "h4",
        Header = "header",
        Hr = "hr",
        I = "i",
        Img = "img",
        Input = "input",
        Label = "label",
        Li = "li",
        Main = "main",
        Nav = "nav",
        Ol = "ol",
        P = "p",
        Pre = "pre",
        Section = "section",
        Small = "small",
        Span = "span",
        Strong = "strong",
        Ul = "ul",
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::Div
    }
}
