//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Ring");

    // 分区
    m.insert(Key::SectionTotal, "总量");
    m.insert(Key::SectionProgress, "进度");
    m.insert(Key::SectionText, "进度文字");
    m.insert(Key::SectionAppearance, "外观");
    m.insert(Key::SectionAnimation, "动画");
    m.insert(Key::SectionDisplay, "显示");

    // 控件
    m.insert(Key::UpdateButton, "更新进度");
    m.insert(Key::RandomColor, "随机");
    m.insert(Key::ClearColor, "无");
    m.insert(Key::Total, "总量");
    m.insert(Key::TotalColor, "总量颜色");
    m.insert(Key::TotalWidth, "总量宽度");
    m.insert(Key::Progress, "进度值");
    m.insert(Key::ProgressColor, "进度颜色");
    m.insert(Key::ProgressWidth, "进度宽度");
    m.insert(Key::ProgressRoundCap, "圆角端点");
    m.insert(Key::TextEnabled, "显示文字");
    m.insert(Key::TextType, "文字类型");
    m.insert(Key::TextTypeProgress, "进度");
    m.insert(Key::TextTypePercent, "百分比");
    m.insert(Key::TextSize, "文字大小");
    m.insert(Key::TextColor, "文字颜色");
    m.insert(Key::FillColor, "填充颜色");
    m.insert(Key::StartAngle, "起始角度");
    m.insert(Key::Animate, "动画");
    m.insert(Key::AnimateDuration, "时长");
    m.insert(Key::Interpolator, "插值器");
    m.insert(Key::DarkMode, "深色模式");
    m.insert(Key::Language, "语言");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
