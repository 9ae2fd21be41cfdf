use iced::{
    Alignment::Center,
    Color, ContentFit, Element, Font, Length, Theme, border, font,
    widget::{column, container, image, row, stack, text},
};

const TITLE: &str = "A Story from Today";
const SUBTITLE: &str = "Create unique stories with AI-generated content!";

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..palette.background.base.color
            }
            .into(),
        ),
        border: border::rounded(12),
        ..container::Style::default()
    }
}

fn error_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        text_color: Some(palette.danger.base.text),
        background: Some(palette.danger.base.color.into()),
        border: border::rounded(6),
        ..container::Style::default()
    }
}

/// App shell: background illustration, header, optional error banner, and
/// the active screen inside a translucent card.
pub fn layout<'a, Message>(
    background: Option<&'a image::Handle>,
    error: Option<&'a str>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let header = column![
        text(TITLE).size(36).font(BOLD),
        text(SUBTITLE).size(18),
    ]
    .spacing(8)
    .align_x(Center);

    let mut body = column![header].spacing(24).width(Length::Fill);

    if let Some(message) = error {
        body = body.push(
            container(row![text("Error: ").font(BOLD), text(message)])
                .padding([12.0, 16.0])
                .width(Length::Fill)
                .style(error_banner),
        );
    }

    let panel = container(body.push(content))
        .padding(32)
        .max_width(720.0)
        .style(card);

    let foreground = container(panel)
        .padding(16)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    match background {
        Some(handle) => stack![
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
            foreground,
        ]
        .into(),
        None => foreground.into(),
    }
}
