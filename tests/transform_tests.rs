//! 句子转换集成测试
//!
//! 严格对照组覆盖双向转换的回环，智能组覆盖混写输入，
//! 另有数学符号与连字符的歧义用例。

use cn2an::{Direction, Transform};

fn strict_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("小王捡了100块钱", "小王捡了一百块钱"),
        ("用户增长最快的3个城市", "用户增长最快的三个城市"),
        ("小王的生日是2001年3月4日", "小王的生日是二零零一年三月四日"),
        ("小王的生日是2012年12月12日", "小王的生日是二零一二年十二月十二日"),
        ("今天股价上涨了8%", "今天股价上涨了百分之八"),
        ("第2天股价下降了-3.8%", "第二天股价下降了百分之负三点八"),
        ("抛出去的硬币为正面的概率是1/2", "抛出去的硬币为正面的概率是二分之一"),
        ("现在室内温度为39℃，很热啊！", "现在室内温度为三十九摄氏度，很热啊！"),
        ("创业板指9月9日早盘低开1.57%", "创业板指九月九日早盘低开百分之一点五七"),
        ("今年盈利增长率为12.34%", "今年盈利增长率为百分之十二点三四"),
        ("实验成功率是0.5%", "实验成功率是百分之零点五"),
        ("股票价格下跌了-7.25%", "股票价格下跌了百分之负七点二五"),
        ("预计需要3/8的时间完成", "预计需要八分之三的时间完成"),
        ("室外温度是-5℃", "室外温度是-五摄氏度"),
        ("我们有2500个用户", "我们有二千五百个用户"),
        ("连续发布3天", "连续发布三天"),
        ("第10期节目", "第十期节目"),
    ]
}

#[test]
fn test_to_chinese_pairs() {
    let t = Transform::new();
    for (arabic, chinese) in strict_pairs() {
        assert_eq!(
            t.transform(arabic, Direction::ToChinese),
            chinese,
            "an2cn: {}",
            arabic
        );
    }
}

#[test]
fn test_to_arabic_pairs() {
    let t = Transform::new();
    for (arabic, chinese) in strict_pairs() {
        assert_eq!(
            t.transform(chinese, Direction::ToArabic),
            arabic,
            "cn2an: {}",
            chinese
        );
    }
}

#[test]
fn test_to_arabic_smart_spans() {
    let t = Transform::new();
    let cases = [
        ("约2.5亿年~6500万年", "约250000000年~65000000年"),
        ("廿二日，日出东方", "22日，日出东方"),
        ("大陆", "大陆"),
        ("半斤", "0.5斤"),
        ("两个", "2个"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            t.transform(input, Direction::ToArabic),
            expected,
            "{}",
            input
        );
    }
}

#[test]
fn test_minus_and_hyphen() {
    let t = Transform::new();
    // 二元减号读 减
    assert_eq!(t.transform("x-y", Direction::ToChinese), "x减y");
    assert_eq!(t.transform("5 - 3", Direction::ToChinese), "五 减 三");
    // 一元负号读 负
    assert_eq!(t.transform("-y", Direction::ToChinese), "负y");
    // 单词内的连字符不是运算符
    assert_eq!(t.transform("web-app2x", Direction::ToChinese), "web-app二x");
    assert_eq!(t.transform("check-in", Direction::ToChinese), "check-in");
}

#[test]
fn test_math_notation() {
    let t = Transform::new();
    assert_eq!(t.transform("1+1=2", Direction::ToChinese), "一加一等于二");
    assert_eq!(t.transform("a>=b", Direction::ToChinese), "a大于等于b");
    assert_eq!(t.transform("3×4", Direction::ToChinese), "三乘四");
    assert_eq!(t.transform("x^3", Direction::ToChinese), "x的三次方");
    assert_eq!(t.transform("|x|", Direction::ToChinese), "x的绝对值");
}

#[test]
fn test_non_numeric_text_unchanged() {
    let t = Transform::new();
    for text in ["你好，世界", "hello world", ""] {
        assert_eq!(t.transform(text, Direction::ToChinese), text);
        assert_eq!(t.transform(text, Direction::ToArabic), text);
    }
}
