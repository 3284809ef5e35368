make_str_enum! {
    Style {
        AlignItems = "align-items",
        Background = "background",
        BackgroundColor = "background-color",
        Border = "border",
        BorderRadius = "border-radius",
        Color = "color",
        Display = "display",
        FlexDirection = "flex-direction",
        FontSize = "font-size",
        FontWeight = "font-weight",
        Gap = "gap",
        Height = "height",
        JustifyContent = "justify-content",
        Margin = "margin",
        MaxWidth = "max-width",
        Opacity = "opacity",
        Padding = "padding",
        TextAlign = "text-align",
        Width = "width",
    }
}
