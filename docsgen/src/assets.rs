use std::fmt::Display;
use strum_macros::Display as StrumDisplay;
use strum_macros::EnumString;

/// Site branding image, displayed as-is.
pub struct LogoAsset {
    pub path: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const LOGO: LogoAsset = LogoAsset {
    path: "/logo.webp",
    alt: "logo",
    width: 384,
    height: 96,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString)]
pub enum ImageFormat {
    #[strum(serialize = "JPG")]
    Jpg,
    #[strum(serialize = "PNG")]
    Png,
    #[strum(serialize = "WebP")]
    WebP,
    #[strum(serialize = "GIF")]
    Gif,
    #[strum(serialize = "SVG")]
    Svg,
}

/// One entry of the image-format comparison gallery on the resource page.
/// Size labels come from the checked-in files, they are not measured here.
pub struct ImageAsset {
    pub path: &'static str,
    pub alt: &'static str,
    pub size_label: &'static str,
    pub format: ImageFormat,
}

impl Display for ImageAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} - {}\t{}", self.format, self.size_label, self.path))
    }
}

pub const SAMPLE_IMAGES: [ImageAsset; 5] = [
    ImageAsset {
        path: "/docs/resource/jpg_img.jpg",
        alt: "jpg",
        size_label: "483KB",
        format: ImageFormat::Jpg,
    },
    ImageAsset {
        path: "/docs/resource/png_img.png",
        alt: "png",
        size_label: "2.2MB",
        format: ImageFormat::Png,
    },
    ImageAsset {
        path: "/docs/resource/webp_img.webp",
        alt: "webp",
        size_label: "126KB",
        format: ImageFormat::WebP,
    },
    ImageAsset {
        path: "/docs/resource/gif_img.gif",
        alt: "gif",
        size_label: "780KB",
        format: ImageFormat::Gif,
    },
    ImageAsset {
        path: "/docs/resource/svg_img.svg",
        alt: "svg",
        size_label: "2.7MB",
        format: ImageFormat::Svg,
    },
];

/// Tests

#[test]
fn format_labels_match_site_copy() {
    use std::str::FromStr;
    assert_eq!(ImageFormat::WebP.to_string(), "WebP");
    assert_eq!(ImageFormat::from_str("JPG").unwrap(), ImageFormat::Jpg);
}

#[test]
fn gallery_covers_all_five_formats() {
    let formats: Vec<ImageFormat> = SAMPLE_IMAGES.iter().map(|image| image.format).collect();
    assert_eq!(
        formats,
        vec![
            ImageFormat::Jpg,
            ImageFormat::Png,
            ImageFormat::WebP,
            ImageFormat::Gif,
            ImageFormat::Svg
        ]
    );
}
