//! Card layout: a rounded border, an optional clipped image in the top-left
//! corner and wrapped text filling the rest

use anyhow::Result;
use clap::Args;
use foyue_paint::{
    Color, ImageProps, ImageSource, MultiTextRequest, Paint, Position, RoundImageProps,
    RoundRectProps, Surface, TextProps,
};
use tracing::info;

use crate::MeasureArgs;

#[derive(Args, Clone, Debug)]
pub struct CardArgs {
    /// Card text
    pub text: String,

    /// Left edge of the card
    #[arg(short, long, default_value = "0")]
    pub x: f32,

    /// Top edge of the card
    #[arg(short, long, default_value = "0")]
    pub y: f32,

    #[arg(long, default_value = "320")]
    pub width: f32,

    #[arg(long, default_value = "180")]
    pub height: f32,

    /// Inset of the border from the card edges
    #[arg(short, long)]
    pub padding: Option<f32>,

    /// Corner radii, one to four values (top-left, top-right, bottom-right, bottom-left)
    #[arg(short, long, value_delimiter = ',')]
    pub radius: Vec<f32>,

    #[arg(long)]
    pub border_color: Option<Color>,

    #[arg(long)]
    pub border_width: Option<f32>,

    /// Fill the border path with this color
    #[arg(long)]
    pub background: Option<Color>,

    /// Image path, URL or data URI drawn in the top-left corner
    #[arg(short, long)]
    pub image: Option<String>,

    /// Side of the square image
    #[arg(long, default_value = "64")]
    pub image_size: f32,

    /// CSS font, e.g. "16px sans-serif"
    #[arg(short, long)]
    pub font: Option<String>,

    #[arg(long)]
    pub text_color: Option<Color>,

    /// Gap between text lines
    #[arg(short, long)]
    pub gap: Option<f32>,

    /// Print JSON on one line
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub measure: MeasureArgs,
}

impl CardArgs {
    fn border(&self) -> RoundRectProps {
        let mut props = RoundRectProps::new().position(Position::new(
            self.x,
            self.y,
            self.width,
            self.height,
        ));
        props.padding = self.padding;
        props.border_color = self.border_color;
        props.border_width = self.border_width;
        if !self.radius.is_empty() {
            props = props.border_radius(self.radius.clone());
        }
        props
    }
}

/// Draw the card described by `args`
pub async fn render<S: Surface>(paint: &mut Paint<S>, args: &CardArgs) -> Result<()> {
    let border = args.border();
    let style = border.fill_defaults(&paint.config().border);
    // Content starts inside the stroke
    let inset = style.padding + style.border_width;

    paint.round_rect(&border);
    if let Some(color) = args.background {
        paint.fill(color);
    }

    let mut text_x = args.x + inset;
    if let Some(uri) = &args.image {
        let image = ImageProps::new(
            ImageSource::from_uri(uri),
            text_x,
            args.y + inset,
            args.image_size,
            args.image_size,
        );
        info!("Drawing image {}", image.source);
        paint
            .draw_round_image(&RoundImageProps::new(image).rect(
                RoundRectProps::new().border_radius(style.border_radius.clone()),
            ))
            .await?;
        text_x += args.image_size + inset;
    }

    let mut text_style = TextProps::new();
    text_style.font = args.font.clone();
    text_style.color = args.text_color;

    let mut request = MultiTextRequest::new(
        args.text.clone(),
        text_x,
        args.y + inset,
        (args.x + args.width - inset - text_x).max(0.0),
    )
    .max_height(args.y + args.height - inset)
    .style(text_style);
    request.gap = args.gap;

    paint.draw_multi_text(&request);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use foyue_paint::{MonospaceMeasurer, RecordingSurface, SurfaceCommand};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        card: CardArgs,
    }

    fn parse(args: &[&str]) -> CardArgs {
        TestCli::parse_from(std::iter::once("foyue").chain(args.iter().copied())).card
    }

    #[test]
    fn test_radius_list_parses() {
        let args = parse(&["hello", "--radius", "4,8", "--border-color", "#f00"]);
        assert_eq!(args.radius, vec![4.0, 8.0]);
        assert_eq!(args.border_color, Some(Color::RED));
    }

    #[test]
    fn test_card_text_sits_inside_border() {
        let args = parse(&["hello world", "--width", "200", "--height", "100", "-p", "2"]);
        let mut paint = Paint::new(RecordingSurface::with_measurer(MonospaceMeasurer::fixed(10.0)));
        pollster::block_on(render(&mut paint, &args)).unwrap();

        let commands = paint.surface().commands();
        assert!(matches!(commands[0], SurfaceCommand::Stroke { .. }));
        match &commands[1] {
            SurfaceCommand::FillText { text, position, .. } => {
                assert_eq!(text, "hello world");
                // padding 2 + default border width 6
                assert_eq!((position.x, position.y), (8.0, 8.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_missing_image_fails_without_leaking_clip() {
        let args = parse(&["hi", "--image", "/no/such/avatar.png"]);
        let mut paint = Paint::new(RecordingSurface::new());
        assert!(pollster::block_on(render(&mut paint, &args)).is_err());
        assert!(paint.surface().clip_region().is_empty());
    }
}
