//! # Pattern Detector Chain
//!
//! An ordered list of named detectors. Each detector resolves to one
//! category code and fires when any of its signals matches the
//! [`DetectionContext`]. The chain is evaluated top to bottom and the first
//! detector that fires wins.
//!
//! ## Ordering
//!
//! Order is part of the contract. Narrow situational detectors (school,
//! home) precede broad ones (location), so "phòng học" is claimed as a
//! classroom before any location rule sees it. The animal detector runs
//! immediately before the shopping detector because "chó" (dog) and "chợ"
//! (market) both normalize to `cho`.
//!
//! Several detectors may resolve to the same code: `location` and `border`
//! both yield `dia-diem`. The chain is not a partition by code and must not
//! be deduplicated.
//!
//! ## Signals
//!
//! Character classes are curated sets of ideographs typical of a semantic
//! domain; a class matches when any of its characters occurs anywhere in the
//! raw headword. Phrase lists match whole tokens of the normalized meaning.
//! First-word signals test the leading token, which in Vietnamese is often
//! a classifier ("con" for animals, "cây" for plants, "màu" for colors).

use crate::context::DetectionContext;

/// One test over a detection context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Any of these characters occurs in the raw headword.
    AnyChar(&'static str),
    /// The raw headword is non-empty and consists only of these characters.
    OnlyChars(&'static str),
    /// Any of these phrases occurs in the normalized meaning as whole tokens.
    Phrase(&'static [&'static str]),
    /// The first meaning token is one of these.
    FirstWord(&'static [&'static str]),
    /// The first meaning token is `token`, a second token exists, and the
    /// second token is not listed in `except_next`.
    LeadingToken {
        /// Required first token.
        token: &'static str,
        /// Second tokens that veto the match.
        except_next: &'static [&'static str],
    },
}

impl Signal {
    /// Evaluate the signal.
    pub fn matches(&self, ctx: &DetectionContext) -> bool {
        match *self {
            Self::AnyChar(class) => ctx.chinese_raw.chars().any(|c| class.contains(c)),
            Self::OnlyChars(class) => {
                !ctx.chinese_raw.is_empty() && ctx.chinese_raw.chars().all(|c| class.contains(c))
            }
            Self::Phrase(phrases) => phrases.iter().any(|p| ctx.meaning_contains(p)),
            Self::FirstWord(words) => ctx.first_word().is_some_and(|w| words.contains(&w)),
            Self::LeadingToken { token, except_next } => {
                ctx.first_word() == Some(token)
                    && ctx
                        .second_word()
                        .is_some_and(|next| !except_next.contains(&next))
            }
        }
    }
}

/// A named predicate resolving to one category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detector {
    /// Unique, human-readable detector name.
    pub name: &'static str,
    /// Category code returned when the detector fires.
    pub code: &'static str,
    /// Fires when any signal matches.
    pub signals: &'static [Signal],
}

impl Detector {
    /// Whether any signal matches.
    pub fn matches(&self, ctx: &DetectionContext) -> bool {
        self.signals.iter().any(|signal| signal.matches(ctx))
    }
}

/// Ordered detector list; first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorChain {
    detectors: Vec<Detector>,
}

impl DetectorChain {
    /// A chain over explicit detectors, evaluated in the given order.
    pub fn new(detectors: Vec<Detector>) -> Self {
        Self { detectors }
    }

    /// The built-in chain for the default catalog.
    pub fn builtin() -> Self {
        Self::new(BUILTIN.to_vec())
    }

    /// A chain that never fires.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The first detector that fires, if any.
    pub fn detect(&self, ctx: &DetectionContext) -> Option<&Detector> {
        self.detectors.iter().find(|d| d.matches(ctx))
    }

    /// Detectors in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Detector> {
        self.detectors.iter()
    }

    /// Position of the first detector with this name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.detectors.iter().position(|d| d.name == name)
    }

    /// Number of detectors.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Whether the chain has no detectors.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorChain {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[Detector] = &[
    Detector {
        name: "school",
        code: "truong-lop",
        signals: &[
            Signal::AnyChar("校学班课堂室讲题试考"),
            Signal::Phrase(&[
                "truong hoc", "lop hoc", "phong hoc", "giao vien", "hoc sinh", "bai tap",
                "ky thi", "ki thi", "thi cu", "thu vien", "giao trinh", "ky tuc xa",
            ]),
        ],
    },
    Detector {
        name: "home",
        code: "nha-noi-that",
        signals: &[
            Signal::AnyChar("房屋室厅床柜窗门"),
            Signal::Phrase(&[
                "phong khach", "phong ngu", "phong tam", "nha bep", "nha ve sinh", "toilet",
                "sofa", "giuong", "tu ao", "tu giay", "ban an", "den trang tri", "ban cong",
                "mai nha",
            ]),
        ],
    },
    Detector {
        name: "people",
        code: "people-relations",
        signals: &[
            Signal::AnyChar("友朋伴侣伙众客邻同"),
            Signal::Phrase(&[
                "ban be", "ban than", "ban hoc", "dong nghiep", "doi tac", "khach hang", "khach",
                "hang xom", "thanh vien", "cong dong", "nhan vien", "doi ngu",
            ]),
        ],
    },
    Detector {
        name: "household",
        code: "sinh-hoat-hang-ngay",
        signals: &[Signal::Phrase(&[
            "don dep", "ve sinh", "lau nha", "quet nha", "giat do", "phoi do", "lau chen",
            "rua chen", "nau an", "nau com", "di cho", "xem phim", "xem tv", "sac", "ham", "cat",
            "pha", "choi nhac", "uom cay", "thu gian",
        ])],
    },
    Detector {
        name: "social-event",
        code: "su-kien-xa-hoi",
        signals: &[
            Signal::AnyChar("会战节庆典疫潮"),
            Signal::Phrase(&[
                "su kien", "le hoi", "hoi nghi", "cuoc hop", "bieu tinh", "chien tranh",
                "phong trao", "van dong", "khung hoang", "dich benh", "dai dich",
            ]),
        ],
    },
    Detector {
        name: "animal",
        code: "dong-vat",
        signals: &[
            Signal::LeadingToken {
                token: "con",
                except_next: &["duong", "nguoi"],
            },
            Signal::AnyChar("狗猫牛羊马鸡鸭鹅鱼鸟猪虎龙蛇熊兔狼象狮龟鹿猴"),
            Signal::Phrase(&["dong vat", "thu cung", "thu hoang", "gia suc", "gia cam"]),
        ],
    },
    Detector {
        name: "shopping",
        code: "mua-sam-giao-dich",
        signals: &[
            Signal::AnyChar("购卖商店市集价折账销"),
            Signal::Phrase(&[
                "mua sam", "mua hang", "ban hang", "cua hang", "sieu thi", "cho", "gia ban",
                "gia mua", "giao dich", "thuong mai", "thanh toan", "hoa don", "giam gia",
                "khuyen mai",
            ]),
        ],
    },
    Detector {
        name: "office",
        code: "cong-viec-van-phong",
        signals: &[
            Signal::AnyChar("办公室报表计划项目合同会议员工"),
            Signal::Phrase(&[
                "van phong", "phong hop", "bao cao", "ke hoach", "du an", "hop dong", "ky ket",
                "lich hop", "lich lam viec", "nhan su",
            ]),
        ],
    },
    Detector {
        name: "occupation",
        code: "nghe-nghiep",
        signals: &[
            Signal::AnyChar("师员士者家警医农工兵导长"),
            Signal::Phrase(&[
                "nghe nghiep", "nghe", "giao vien", "bac si", "y ta", "ky su", "cong nhan",
                "nong dan", "thu ky", "luat su", "phong vien", "dien vien", "quan doi",
                "canh sat", "doanh nhan", "giam doc",
            ]),
        ],
    },
    Detector {
        name: "plant",
        code: "thuc-vat",
        signals: &[
            Signal::LeadingToken {
                token: "cay",
                except_next: &[],
            },
            Signal::AnyChar("花草树木竹叶根果菜茶米麦"),
            Signal::Phrase(&[
                "hoa", "la", "la cay", "la non", "re", "than cay", "rau", "trai", "qua",
            ]),
        ],
    },
    Detector {
        name: "color",
        code: "mau-sac",
        signals: &[
            Signal::FirstWord(&["mau"]),
            Signal::AnyChar("红蓝绿黄黑白紫粉橙棕灰银金"),
            Signal::Phrase(&["mau"]),
        ],
    },
    Detector {
        name: "body",
        code: "bo-phan-co-the",
        signals: &[
            Signal::FirstWord(&[
                "dau", "mat", "mui", "mieng", "tai", "co", "vai", "lung", "nguc", "bung", "chan",
                "tay", "tim", "gan", "phoi", "da", "xuong", "long", "toc", "bim",
            ]),
            Signal::AnyChar("手脚眼鼻口耳头心肝肺骨腿臂皮发牙舌背胸腹"),
            Signal::Phrase(&["co the", "bo phan", "xuong", "noi tang"]),
        ],
    },
    Detector {
        name: "family",
        code: "gia-dinh",
        signals: &[
            Signal::AnyChar("爸妈父母姐妹哥弟爷奶孙姑舅姨嫂媳婆公"),
            Signal::Phrase(&[
                "gia dinh", "bo me", "cha me", "vo chong", "anh trai", "chi gai", "em trai",
                "em gai", "con trai", "con gai",
            ]),
        ],
    },
    Detector {
        name: "food",
        code: "thuc-pham-do-uong",
        signals: &[
            Signal::AnyChar("饭米面菜肉鱼汤茶酒糖奶糕饼果蔬饮"),
            Signal::Phrase(&[
                "com", "gao", "mi", "bun", "pho", "banh", "thit", "rau", "hoa qua", "trai cay",
                "nuoc", "tra", "ca phe", "sua", "bia", "ruou",
            ]),
        ],
    },
    Detector {
        name: "clothing",
        code: "quan-ao-phu-kien",
        signals: &[
            Signal::FirstWord(&[
                "ao", "quan", "vay", "dam", "giay", "dep", "tat", "khan", "mu", "non", "that",
                "caravat", "tui", "vi",
            ]),
            Signal::AnyChar("衣服裤裙鞋袜帽领巾戴"),
            Signal::Phrase(&[
                "quan ao", "ao so mi", "ao khoac", "ao len", "giay dep", "phu kien",
            ]),
        ],
    },
    Detector {
        name: "study-supplies",
        code: "do-hoc-tap",
        signals: &[
            Signal::AnyChar("书本笔纸课校班习"),
            Signal::Phrase(&[
                "sach", "vo", "tap", "but", "but chi", "thuoc ke", "compa", "bang", "lop hoc",
                "cap sach",
            ]),
        ],
    },
    Detector {
        name: "location",
        code: "dia-diem",
        signals: &[
            Signal::AnyChar("馆院店楼室场站校城国村寺庙厦港"),
            Signal::Phrase(&[
                "dia diem", "nha hang", "cua hang", "truong hoc", "benh vien", "cong vien",
                "thu vien", "sieu thi", "cho", "san bay", "ga", "ben xe", "khach san", "nha tho",
                "chua",
            ]),
        ],
    },
    Detector {
        name: "finance",
        code: "tien-tai-chinh",
        signals: &[
            Signal::AnyChar("钱价费税账贷款银利薪资购销"),
            Signal::Phrase(&[
                "tien", "gia", "gia ca", "gia ban", "tai chinh", "ngan hang", "lai suat",
                "thu nhap", "chi phi", "hoa don", "thanh toan", "vay", "no", "tai san",
            ]),
        ],
    },
    Detector {
        name: "technology",
        code: "cong-nghe-truyen-thong",
        signals: &[
            Signal::AnyChar("电脑网络讯息软硬件媒视播程码"),
            Signal::Phrase(&[
                "cong nghe", "ky thuat", "may tinh", "may chu", "dien thoai", "internet",
                "mang xa hoi", "wifi", "website", "ung dung", "phan mem",
            ]),
        ],
    },
    Detector {
        name: "nature",
        code: "thien-nhien-moi-truong",
        signals: &[
            Signal::AnyChar("山川河湖海林田气候环境"),
            Signal::Phrase(&[
                "thien nhien", "moi truong", "khi hau", "bao ton", "o nhiem", "rung", "song",
                "bien", "ho", "sa mac", "dong bang",
            ]),
        ],
    },
    Detector {
        name: "weather",
        code: "hien-tuong-tu-nhien",
        signals: &[
            Signal::AnyChar("雨雪风雷雾震波温潮"),
            Signal::Phrase(&[
                "mua", "gio", "tuyet", "suong", "bao", "loc", "dong dat", "nui lua", "song than",
                "ap thap", "ap cao",
            ]),
        ],
    },
    Detector {
        name: "number",
        code: "so-luong-dem",
        signals: &[
            Signal::OnlyChars("零一二三四五六七八九十百千万亿0123456789"),
            Signal::FirstWord(&["so", "thu", "phan", "lan", "khap"]),
            Signal::Phrase(&["phan tram", "phan so", "toan bo"]),
        ],
    },
    Detector {
        name: "measure-word",
        code: "luong-tu",
        signals: &[
            Signal::FirstWord(&[
                "cai", "chiec", "quyen", "cuon", "to", "tam", "vien", "mieng", "chut", "giot",
                "cap", "doi", "nguoi", "con", "cay", "bo",
            ]),
            Signal::Phrase(&["luong tu", "don vi"]),
        ],
    },
    Detector {
        name: "health",
        code: "suc-khoe-benh",
        signals: &[
            Signal::AnyChar("病疾癌症医药疗检疫康"),
            Signal::Phrase(&[
                "benh", "ung thu", "trieu chung", "dau", "dau nhuc", "thuoc", "chua tri",
                "phau thuat", "kham", "vac xin",
            ]),
        ],
    },
    Detector {
        name: "particle",
        code: "tro-tu",
        signals: &[
            Signal::AnyChar("了着过吧呢吗嘛啊呀哇啦呗"),
            Signal::Phrase(&["da", "roi", "thoi", "day", "ay", "nhi", "chu"]),
        ],
    },
    Detector {
        name: "adverb",
        code: "trang-tu",
        signals: &[Signal::Phrase(&[
            "rat", "kha", "hoi", "thuong", "luon", "da", "dang", "sap", "vua", "tung",
            "chua tung", "khong can",
        ])],
    },
    Detector {
        name: "conjunction",
        code: "lien-tu",
        signals: &[Signal::Phrase(&[
            "va", "nhung", "tuy nhien", "boi vi", "nen", "vi vay", "do do", "neu", "hoac", "het",
            "ca",
        ])],
    },
    Detector {
        name: "preposition",
        code: "gioi-tu",
        signals: &[
            Signal::AnyChar("在到从向往离跟于把被对"),
            Signal::Phrase(&[
                "trong", "ngoai", "tren", "duoi", "giua", "ben", "gan", "xa", "truoc", "sau",
                "ben trai", "ben phai", "xung quanh", "ke ben", "can cu theo", "can cu",
                "dua theo", "theo", "tu", "den", "ve", "o", "tai", "bang", "voi",
            ]),
        ],
    },
    Detector {
        name: "emotion",
        code: "cam-xuc-tinh-than",
        signals: &[Signal::Phrase(&[
            "bi tham", "bi quan", "vu ng ve", "vung ve", "oan han", "phan nan",
        ])],
    },
    Detector {
        name: "disclosure",
        code: "giao-tiep",
        signals: &[Signal::Phrase(&["boc lo", "bo loc", "tiet lo", "cong bo"])],
    },
    Detector {
        name: "border",
        code: "dia-diem",
        signals: &[Signal::Phrase(&["ranh gioi", "bien gioi"])],
    },
    Detector {
        name: "modal",
        code: "hu-tu-tro-ngu-khi",
        signals: &[Signal::Phrase(&[
            "co le", "co the", "nen", "nhat dinh", "chac chan", "hinh nhu", "co ve", "e rang",
        ])],
    },
    Detector {
        name: "interjection",
        code: "than-tu",
        signals: &[
            Signal::AnyChar("哎呀啊哦喂呦咦唉嗨嘿"),
            Signal::Phrase(&["oi", "troi oi", "a", "ui", "oi troi", "haizz", "ai cha", "wow"]),
        ],
    },
    Detector {
        name: "onomatopoeia",
        code: "tu-tuong-thanh",
        signals: &[Signal::AnyChar("叮咚滴答哗啦隆轰嘎咔嚓嗒")],
    },
];
