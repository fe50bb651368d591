//! 转换能力演示

use cn2an::{An2Cn, Cn2An, Cn2anConfig, Direction, ParseMode, RenderMode, Transform};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cn2an::init_logging();
    let config = Cn2anConfig::load().unwrap_or_default();

    println!("=== cn2an 示例 ===");
    println!();

    println!("1. 中文数字 => 阿拉伯数字 (默认 {} 模式)", config.parse_mode);
    let c = Cn2An::new();
    println!(
        "  一百二十三 (strict) => {:.0}",
        c.parse("一百二十三", ParseMode::Strict)?
    );
    println!(
        "  一千零一 (strict) => {:.0}",
        c.parse("一千零一", ParseMode::Strict)?
    );
    println!(
        "  负一百二十三点四五 (strict) => {}",
        c.parse("负一百二十三点四五", ParseMode::Strict)?
    );
    println!(
        "  一二三 (normal) => {:.0}",
        c.parse("一二三", ParseMode::Normal)?
    );
    println!(
        "  一万二 (normal) => {:.0}",
        c.parse("一万二", ParseMode::Normal)?
    );
    println!(
        "  1百23 (smart) => {:.0}",
        c.parse("1百23", ParseMode::Smart)?
    );
    println!(
        "  10.1万 (smart) => {:.0}",
        c.parse("10.1万", ParseMode::Smart)?
    );
    println!();

    println!("2. 阿拉伯数字 => 中文数字 (默认 {} 模式)", config.render_mode);
    let a = An2Cn::new();
    println!("  123 (low) => {}", a.convert(123, RenderMode::Low)?);
    println!("  1001 (low) => {}", a.convert(1001, RenderMode::Low)?);
    println!("  -123.45 (low) => {}", a.convert(-123.45, RenderMode::Low)?);
    println!("  123 (up) => {}", a.convert(123, RenderMode::Up)?);
    println!("  123 (rmb) => {}", a.convert(123, RenderMode::Rmb)?);
    println!("  123.45 (rmb) => {}", a.convert(123.45, RenderMode::Rmb)?);
    println!("  0.5 (rmb) => {}", a.convert(0.5, RenderMode::Rmb)?);
    println!("  123 (direct) => {}", a.convert(123, RenderMode::Direct)?);
    println!();

    println!("3. 句子转换");
    let t = Transform::new();
    for sentence in [
        "小王捡了一百块钱",
        "小王的生日是二零零一年三月四日",
        "抛出去的硬币为正面的概率是二分之一",
    ] {
        println!(
            "  {} (cn2an) => {}",
            sentence,
            t.transform(sentence, Direction::ToArabic)
        );
    }
    for sentence in [
        "小王捡了100块钱",
        "小王的生日是2001年3月4日",
        "抛出去的硬币为正面的概率是1/2",
    ] {
        println!(
            "  {} (an2cn) => {}",
            sentence,
            t.transform(sentence, Direction::ToChinese)
        );
    }
    println!();
    println!("=== 示例完成 ===");

    Ok(())
}
