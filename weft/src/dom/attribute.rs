make_str_enum! {
    Attr {
        Alt = "alt",
        AriaCurrent = "aria-current",
        AriaHidden = "aria-hidden",
        AriaLabel = "aria-label",
        Class = "class",
        DataRoute = "data-route",
        Height = "height",
        Href = "href",
        Id = "id",
        Lang = "lang",
        Loading = "loading",
        Rel = "rel",
        Role = "role",
        Src = "src",
        Style = "style",
        Target = "target",
        Title = "title",
        Type = "type",
        Width = "width",
    }
}
