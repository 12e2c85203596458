// Generated romaji -> kana table (hiragana, katakana, hankaku-katakana forms).
// Sorted lexicographically by romaji key; looked up via partition_point binary search.
pub(crate) static ROMAJI_RULES: &[(&str, KanaRule)] = &[
    (",", KanaRule { hiragana: "、", katakana: "、", hankaku: "､" }),
    (".", KanaRule { hiragana: "。", katakana: "。", hankaku: "｡" }),
    ("a", KanaRule { hiragana: "あ", katakana: "ア", hankaku: "ｱ" }),
    ("ba", KanaRule { hiragana: "ば", katakana: "バ", hankaku: "ﾊﾞ" }),
    ("be", KanaRule { hiragana: "べ", katakana: "ベ", hankaku: "ﾍﾞ" }),
    ("bi", KanaRule { hiragana: "び", katakana: "ビ", hankaku: "ﾋﾞ" }),
    ("bo", KanaRule { hiragana: "ぼ", katakana: "ボ", hankaku: "ﾎﾞ" }),
    ("bu", KanaRule { hiragana: "ぶ", katakana: "ブ", hankaku: "ﾌﾞ" }),
    ("bya", KanaRule { hiragana: "びゃ", katakana: "ビャ", hankaku: "ﾋﾞｬ" }),
    ("bye", KanaRule { hiragana: "びぇ", katakana: "ビェ", hankaku: "ﾋﾞｪ" }),
    ("byi", KanaRule { hiragana: "びぃ", katakana: "ビィ", hankaku: "ﾋﾞｨ" }),
    ("byo", KanaRule { hiragana: "びょ", katakana: "ビョ", hankaku: "ﾋﾞｮ" }),
    ("byu", KanaRule { hiragana: "びゅ", katakana: "ビュ", hankaku: "ﾋﾞｭ" }),
    ("cha", KanaRule { hiragana: "ちゃ", katakana: "チャ", hankaku: "ﾁｬ" }),
    ("chi", KanaRule { hiragana: "ち", katakana: "チ", hankaku: "ﾁ" }),
    ("cho", KanaRule { hiragana: "ちょ", katakana: "チョ", hankaku: "ﾁｮ" }),
    ("chu", KanaRule { hiragana: "ちゅ", katakana: "チュ", hankaku: "ﾁｭ" }),
    ("da", KanaRule { hiragana: "だ", katakana: "ダ", hankaku: "ﾀﾞ" }),
    ("de", KanaRule { hiragana: "で", katakana: "デ", hankaku: "ﾃﾞ" }),
    ("di", KanaRule { hiragana: "ぢ", katakana: "ヂ", hankaku: "ﾁﾞ" }),
    ("dji", KanaRule { hiragana: "ぢ", katakana: "ヂ", hankaku: "ﾁﾞ" }),
    ("do", KanaRule { hiragana: "ど", katakana: "ド", hankaku: "ﾄﾞ" }),
    ("du", KanaRule { hiragana: "づ", katakana: "ヅ", hankaku: "ﾂﾞ" }),
    ("dya", KanaRule { hiragana: "ぢゃ", katakana: "ヂャ", hankaku: "ﾁﾞｬ" }),
    ("dye", KanaRule { hiragana: "ぢぇ", katakana: "ヂェ", hankaku: "ﾁﾞｪ" }),
    ("dyi", KanaRule { hiragana: "ぢぃ", katakana: "ヂィ", hankaku: "ﾁﾞｨ" }),
    ("dyo", KanaRule { hiragana: "ぢょ", katakana: "ヂョ", hankaku: "ﾁﾞｮ" }),
    ("dyu", KanaRule { hiragana: "ぢゅ", katakana: "ヂュ", hankaku: "ﾁﾞｭ" }),
    ("dzu", KanaRule { hiragana: "づ", katakana: "ヅ", hankaku: "ﾂﾞ" }),
    ("e", KanaRule { hiragana: "え", katakana: "エ", hankaku: "ｴ" }),
    ("fa", KanaRule { hiragana: "ふぁ", katakana: "ファ", hankaku: "ﾌｧ" }),
    ("fe", KanaRule { hiragana: "ふぇ", katakana: "フェ", hankaku: "ﾌｪ" }),
    ("fi", KanaRule { hiragana: "ふぃ", katakana: "フィ", hankaku: "ﾌｨ" }),
    ("fo", KanaRule { hiragana: "ふぉ", katakana: "フォ", hankaku: "ﾌｫ" }),
    ("fu", KanaRule { hiragana: "ふ", katakana: "フ", hankaku: "ﾌ" }),
    ("ga", KanaRule { hiragana: "が", katakana: "ガ", hankaku: "ｶﾞ" }),
    ("ge", KanaRule { hiragana: "げ", katakana: "ゲ", hankaku: "ｹﾞ" }),
    ("gi", KanaRule { hiragana: "ぎ", katakana: "ギ", hankaku: "ｷﾞ" }),
    ("go", KanaRule { hiragana: "ご", katakana: "ゴ", hankaku: "ｺﾞ" }),
    ("gu", KanaRule { hiragana: "ぐ", katakana: "グ", hankaku: "ｸﾞ" }),
    ("gya", KanaRule { hiragana: "ぎゃ", katakana: "ギャ", hankaku: "ｷﾞｬ" }),
    ("gye", KanaRule { hiragana: "ぎぇ", katakana: "ギェ", hankaku: "ｷﾞｪ" }),
    ("gyi", KanaRule { hiragana: "ぎぃ", katakana: "ギィ", hankaku: "ｷﾞｨ" }),
    ("gyo", KanaRule { hiragana: "ぎょ", katakana: "ギョ", hankaku: "ｷﾞｮ" }),
    ("gyu", KanaRule { hiragana: "ぎゅ", katakana: "ギュ", hankaku: "ｷﾞｭ" }),
    ("ha", KanaRule { hiragana: "は", katakana: "ハ", hankaku: "ﾊ" }),
    ("he", KanaRule { hiragana: "へ", katakana: "ヘ", hankaku: "ﾍ" }),
    ("hi", KanaRule { hiragana: "ひ", katakana: "ヒ", hankaku: "ﾋ" }),
    ("ho", KanaRule { hiragana: "ほ", katakana: "ホ", hankaku: "ﾎ" }),
    ("hu", KanaRule { hiragana: "ふ", katakana: "フ", hankaku: "ﾌ" }),
    ("hya", KanaRule { hiragana: "ひゃ", katakana: "ヒャ", hankaku: "ﾋｬ" }),
    ("hye", KanaRule { hiragana: "ひぇ", katakana: "ヒェ", hankaku: "ﾋｪ" }),
    ("hyi", KanaRule { hiragana: "ひぃ", katakana: "ヒィ", hankaku: "ﾋｨ" }),
    ("hyo", KanaRule { hiragana: "ひょ", katakana: "ヒョ", hankaku: "ﾋｮ" }),
    ("hyu", KanaRule { hiragana: "ひゅ", katakana: "ヒュ", hankaku: "ﾋｭ" }),
    ("i", KanaRule { hiragana: "い", katakana: "イ", hankaku: "ｲ" }),
    ("ja", KanaRule { hiragana: "じゃ", katakana: "ジャ", hankaku: "ｼﾞｬ" }),
    ("jo", KanaRule { hiragana: "じょ", katakana: "ジョ", hankaku: "ｼﾞｮ" }),
    ("ju", KanaRule { hiragana: "じゅ", katakana: "ジュ", hankaku: "ｼﾞｭ" }),
    ("ka", KanaRule { hiragana: "か", katakana: "カ", hankaku: "ｶ" }),
    ("ke", KanaRule { hiragana: "け", katakana: "ケ", hankaku: "ｹ" }),
    ("ki", KanaRule { hiragana: "き", katakana: "キ", hankaku: "ｷ" }),
    ("ko", KanaRule { hiragana: "こ", katakana: "コ", hankaku: "ｺ" }),
    ("ku", KanaRule { hiragana: "く", katakana: "ク", hankaku: "ｸ" }),
    ("kya", KanaRule { hiragana: "きゃ", katakana: "キャ", hankaku: "ｷｬ" }),
    ("kye", KanaRule { hiragana: "きぇ", katakana: "キェ", hankaku: "ｷｪ" }),
    ("kyi", KanaRule { hiragana: "きぃ", katakana: "キィ", hankaku: "ｷｨ" }),
    ("kyo", KanaRule { hiragana: "きょ", katakana: "キョ", hankaku: "ｷｮ" }),
    ("kyu", KanaRule { hiragana: "きゅ", katakana: "キュ", hankaku: "ｷｭ" }),
    ("ma", KanaRule { hiragana: "ま", katakana: "マ", hankaku: "ﾏ" }),
    ("me", KanaRule { hiragana: "め", katakana: "メ", hankaku: "ﾒ" }),
    ("mi", KanaRule { hiragana: "み", katakana: "ミ", hankaku: "ﾐ" }),
    ("mo", KanaRule { hiragana: "も", katakana: "モ", hankaku: "ﾓ" }),
    ("mu", KanaRule { hiragana: "む", katakana: "ム", hankaku: "ﾑ" }),
    ("mya", KanaRule { hiragana: "みゃ", katakana: "ミャ", hankaku: "ﾐｬ" }),
    ("mye", KanaRule { hiragana: "みぇ", katakana: "ミェ", hankaku: "ﾐｪ" }),
    ("myi", KanaRule { hiragana: "みぃ", katakana: "ミィ", hankaku: "ﾐｨ" }),
    ("myo", KanaRule { hiragana: "みょ", katakana: "ミョ", hankaku: "ﾐｮ" }),
    ("myu", KanaRule { hiragana: "みゅ", katakana: "ミュ", hankaku: "ﾐｭ" }),
    ("n'", KanaRule { hiragana: "ん", katakana: "ン", hankaku: "ﾝ" }),
    ("na", KanaRule { hiragana: "な", katakana: "ナ", hankaku: "ﾅ" }),
    ("ne", KanaRule { hiragana: "ね", katakana: "ネ", hankaku: "ﾈ" }),
    ("ni", KanaRule { hiragana: "に", katakana: "ニ", hankaku: "ﾆ" }),
    ("nn", KanaRule { hiragana: "ん", katakana: "ン", hankaku: "ﾝ" }),
    ("no", KanaRule { hiragana: "の", katakana: "ノ", hankaku: "ﾉ" }),
    ("nu", KanaRule { hiragana: "ぬ", katakana: "ヌ", hankaku: "ﾇ" }),
    ("nya", KanaRule { hiragana: "にゃ", katakana: "ニャ", hankaku: "ﾆｬ" }),
    ("nye", KanaRule { hiragana: "にぇ", katakana: "ニェ", hankaku: "ﾆｪ" }),
    ("nyi", KanaRule { hiragana: "にぃ", katakana: "ニィ", hankaku: "ﾆｨ" }),
    ("nyo", KanaRule { hiragana: "にょ", katakana: "ニョ", hankaku: "ﾆｮ" }),
    ("nyu", KanaRule { hiragana: "にゅ", katakana: "ニュ", hankaku: "ﾆｭ" }),
    ("o", KanaRule { hiragana: "お", katakana: "オ", hankaku: "ｵ" }),
    ("pa", KanaRule { hiragana: "ぱ", katakana: "パ", hankaku: "ﾊﾟ" }),
    ("pe", KanaRule { hiragana: "ぺ", katakana: "ペ", hankaku: "ﾍﾟ" }),
    ("pi", KanaRule { hiragana: "ぴ", katakana: "ピ", hankaku: "ﾋﾟ" }),
    ("po", KanaRule { hiragana: "ぽ", katakana: "ポ", hankaku: "ﾎﾟ" }),
    ("pu", KanaRule { hiragana: "ぷ", katakana: "プ", hankaku: "ﾌﾟ" }),
    ("pya", KanaRule { hiragana: "ぴゃ", katakana: "ピャ", hankaku: "ﾋﾟｬ" }),
    ("pye", KanaRule { hiragana: "ぴぇ", katakana: "ピェ", hankaku: "ﾋﾟｪ" }),
    ("pyi", KanaRule { hiragana: "ぴぃ", katakana: "ピィ", hankaku: "ﾋﾟｨ" }),
    ("pyo", KanaRule { hiragana: "ぴょ", katakana: "ピョ", hankaku: "ﾋﾟｮ" }),
    ("pyu", KanaRule { hiragana: "ぴゅ", katakana: "ピュ", hankaku: "ﾋﾟｭ" }),
    ("ra", KanaRule { hiragana: "ら", katakana: "ラ", hankaku: "ﾗ" }),
    ("re", KanaRule { hiragana: "れ", katakana: "レ", hankaku: "ﾚ" }),
    ("ri", KanaRule { hiragana: "り", katakana: "リ", hankaku: "ﾘ" }),
    ("ro", KanaRule { hiragana: "ろ", katakana: "ロ", hankaku: "ﾛ" }),
    ("ru", KanaRule { hiragana: "る", katakana: "ル", hankaku: "ﾙ" }),
    ("rya", KanaRule { hiragana: "りゃ", katakana: "リャ", hankaku: "ﾘｬ" }),
    ("rye", KanaRule { hiragana: "りぇ", katakana: "リェ", hankaku: "ﾘｪ" }),
    ("ryi", KanaRule { hiragana: "りぃ", katakana: "リィ", hankaku: "ﾘｨ" }),
    ("ryo", KanaRule { hiragana: "りょ", katakana: "リョ", hankaku: "ﾘｮ" }),
    ("ryu", KanaRule { hiragana: "りゅ", katakana: "リュ", hankaku: "ﾘｭ" }),
    ("sa", KanaRule { hiragana: "さ", katakana: "サ", hankaku: "ｻ" }),
    ("se", KanaRule { hiragana: "せ", katakana: "セ", hankaku: "ｾ" }),
    ("sha", KanaRule { hiragana: "しゃ", katakana: "シャ", hankaku: "ｼｬ" }),
    ("shi", KanaRule { hiragana: "し", katakana: "シ", hankaku: "ｼ" }),
    ("sho", KanaRule { hiragana: "しょ", katakana: "ショ", hankaku: "ｼｮ" }),
    ("shu", KanaRule { hiragana: "しゅ", katakana: "シュ", hankaku: "ｼｭ" }),
    ("si", KanaRule { hiragana: "し", katakana: "シ", hankaku: "ｼ" }),
    ("so", KanaRule { hiragana: "そ", katakana: "ソ", hankaku: "ｿ" }),
    ("su", KanaRule { hiragana: "す", katakana: "ス", hankaku: "ｽ" }),
    ("sya", KanaRule { hiragana: "しゃ", katakana: "シャ", hankaku: "ｼｬ" }),
    ("sye", KanaRule { hiragana: "しぇ", katakana: "シェ", hankaku: "ｼｪ" }),
    ("syi", KanaRule { hiragana: "しぃ", katakana: "シィ", hankaku: "ｼｨ" }),
    ("syo", KanaRule { hiragana: "しょ", katakana: "ショ", hankaku: "ｼｮ" }),
    ("syu", KanaRule { hiragana: "しゅ", katakana: "シュ", hankaku: "ｼｭ" }),
    ("ta", KanaRule { hiragana: "た", katakana: "タ", hankaku: "ﾀ" }),
    ("te", KanaRule { hiragana: "て", katakana: "テ", hankaku: "ﾃ" }),
    ("ti", KanaRule { hiragana: "ち", katakana: "チ", hankaku: "ﾁ" }),
    ("to", KanaRule { hiragana: "と", katakana: "ト", hankaku: "ﾄ" }),
    ("tsu", KanaRule { hiragana: "つ", katakana: "ツ", hankaku: "ﾂ" }),
    ("tu", KanaRule { hiragana: "つ", katakana: "ツ", hankaku: "ﾂ" }),
    ("tya", KanaRule { hiragana: "ちゃ", katakana: "チャ", hankaku: "ﾁｬ" }),
    ("tye", KanaRule { hiragana: "ちぇ", katakana: "チェ", hankaku: "ﾁｪ" }),
    ("tyi", KanaRule { hiragana: "ちぃ", katakana: "チィ", hankaku: "ﾁｨ" }),
    ("tyo", KanaRule { hiragana: "ちょ", katakana: "チョ", hankaku: "ﾁｮ" }),
    ("tyu", KanaRule { hiragana: "ちゅ", katakana: "チュ", hankaku: "ﾁｭ" }),
    ("u", KanaRule { hiragana: "う", katakana: "ウ", hankaku: "ｳ" }),
    ("va", KanaRule { hiragana: "う゛ぁ", katakana: "ヴァ", hankaku: "ｳﾞｧ" }),
    ("ve", KanaRule { hiragana: "う゛ぇ", katakana: "ヴェ", hankaku: "ｳﾞｪ" }),
    ("vi", KanaRule { hiragana: "う゛ぃ", katakana: "ヴィ", hankaku: "ｳﾞｨ" }),
    ("vo", KanaRule { hiragana: "う゛ぉ", katakana: "ヴォ", hankaku: "ｳﾞｫ" }),
    ("vu", KanaRule { hiragana: "う゛", katakana: "ヴ", hankaku: "ｳﾞ" }),
    ("wa", KanaRule { hiragana: "わ", katakana: "ワ", hankaku: "ﾜ" }),
    ("we", KanaRule { hiragana: "ゑ", katakana: "ヱ", hankaku: "ヱ" }),
    ("wi", KanaRule { hiragana: "ゐ", katakana: "ヰ", hankaku: "ヰ" }),
    ("wo", KanaRule { hiragana: "を", katakana: "ヲ", hankaku: "ｦ" }),
    ("ya", KanaRule { hiragana: "や", katakana: "ヤ", hankaku: "ﾔ" }),
    ("yo", KanaRule { hiragana: "よ", katakana: "ヨ", hankaku: "ﾖ" }),
    ("yu", KanaRule { hiragana: "ゆ", katakana: "ユ", hankaku: "ﾕ" }),
    ("z,", KanaRule { hiragana: "‥", katakana: "‥", hankaku: "‥" }),
    ("z-", KanaRule { hiragana: "〜", katakana: "〜", hankaku: "〜" }),
    ("z.", KanaRule { hiragana: "…", katakana: "…", hankaku: "…" }),
    ("z/", KanaRule { hiragana: "・", katakana: "・", hankaku: "･" }),
    ("z[", KanaRule { hiragana: "『", katakana: "『", hankaku: "『" }),
    ("z]", KanaRule { hiragana: "』", katakana: "』", hankaku: "』" }),
    ("za", KanaRule { hiragana: "ざ", katakana: "ザ", hankaku: "ｻﾞ" }),
    ("ze", KanaRule { hiragana: "ぜ", katakana: "ゼ", hankaku: "ｾﾞ" }),
    ("zh", KanaRule { hiragana: "←", katakana: "←", hankaku: "←" }),
    ("zi", KanaRule { hiragana: "じ", katakana: "ジ", hankaku: "ｼﾞ" }),
    ("zj", KanaRule { hiragana: "↓", katakana: "↓", hankaku: "↓" }),
    ("zk", KanaRule { hiragana: "↑", katakana: "↑", hankaku: "↑" }),
    ("zl", KanaRule { hiragana: "→", katakana: "→", hankaku: "→" }),
    ("zo", KanaRule { hiragana: "ぞ", katakana: "ゾ", hankaku: "ｿﾞ" }),
    ("zu", KanaRule { hiragana: "ず", katakana: "ズ", hankaku: "ｽﾞ" }),
    ("zya", KanaRule { hiragana: "じゃ", katakana: "ジャ", hankaku: "ｼﾞｬ" }),
    ("zye", KanaRule { hiragana: "じぇ", katakana: "ジェ", hankaku: "ｼﾞｪ" }),
    ("zyi", KanaRule { hiragana: "じぃ", katakana: "ジィ", hankaku: "ｼﾞｨ" }),
    ("zyo", KanaRule { hiragana: "じょ", katakana: "ジョ", hankaku: "ｼﾞｮ" }),
    ("zyu", KanaRule { hiragana: "じゅ", katakana: "ジュ", hankaku: "ｼﾞｭ" }),
];
// total rules: 170
