//! # Built-in Category Catalog
//!
//! The 48 categories every vocabulary entry is sorted into, grouped as
//! nouns, verbs, adjectives, function words and situations. Keywords are
//! written in normalized form (no tone marks, lowercase, single spaces).
//!
//! Order matters: the keyword-scoring fallback keeps the first of several
//! equally scored categories.

use lexcat_core::{TaxonomyError, WordGroup};

use crate::definition::{CategoryDefinition, Taxonomy};

/// Code of the catch-all category ("abstract concepts").
pub const FALLBACK_CODE: &str = "khai-niem-truu-tuong";

struct CatalogEntry {
    code: &'static str,
    name_local: &'static str,
    name_alt: &'static str,
    group: WordGroup,
    keywords: &'static [&'static str],
    legacy_names: &'static [&'static str],
}

impl CatalogEntry {
    fn to_definition(&self) -> CategoryDefinition {
        CategoryDefinition::new(self.code, self.name_local, self.name_alt, self.group)
            .with_keywords(self.keywords.iter().copied())
            .with_legacy_names(self.legacy_names.iter().copied())
    }
}

/// The built-in definitions, in catalog order.
pub fn default_definitions() -> Vec<CategoryDefinition> {
    CATALOG.iter().map(CatalogEntry::to_definition).collect()
}

/// The built-in taxonomy with [`FALLBACK_CODE`] as the catch-all.
pub fn default_taxonomy() -> Result<Taxonomy, TaxonomyError> {
    Taxonomy::new(default_definitions(), FALLBACK_CODE)
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        code: "people-relations",
        name_local: "Con người & quan hệ xã hội",
        name_alt: "People & Social Relations",
        group: WordGroup::Noun,
        keywords: &[
            "ban be", "quan he", "bang huu", "dong nghiep", "doi tac", "hang xom",
            "khach hang", "khach moi", "cong dan", "nhan su", "doan the", "nhom nguoi",
            "doi thu", "ban trai", "ban gai", "doi doi", "ban cung lop", "nguoi dung",
            "nguoi tham gia",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "gia-dinh",
        name_local: "Gia đình",
        name_alt: "Family",
        group: WordGroup::Noun,
        keywords: &[
            "gia dinh", "bo me", "cha me", "ong noi", "ba noi", "ong ngoai", "ba ngoai",
            "anh trai", "chi gai", "em trai", "em gai", "vo chong", "doi vo chong",
            "con trai", "con gai", "chau noi", "chau ngoai", "than nhan", "ho hang",
        ],
        legacy_names: &["gia dinh"],
    },
    CatalogEntry {
        code: "nghe-nghiep",
        name_local: "Nghề nghiệp",
        name_alt: "Occupations",
        group: WordGroup::Noun,
        keywords: &[
            "nghe nghiep", "nghe", "nghe si", "cong nhan", "ky su", "bac si", "y ta",
            "giao vien", "sinh vien", "hoc sinh", "tai xe", "quan ly", "sep", "thu ky",
            "nong dan", "luat su", "bao chi", "nha bao", "dien vien", "nghe thu cong",
            "tho moc", "tho kim hoan", "tho dieu khac", "khoi nghiep",
        ],
        legacy_names: &["cong viec"],
    },
    CatalogEntry {
        code: "bo-phan-co-the",
        name_local: "Bộ phận cơ thể",
        name_alt: "Body Parts",
        group: WordGroup::Noun,
        keywords: &[
            "co the", "dau", "mat", "mui", "mieng", "tai", "co", "vai", "lung", "chan",
            "tay", "ngon", "tim", "gan", "da", "xuong", "co bap", "noi tang",
        ],
        legacy_names: &["co the"],
    },
    CatalogEntry {
        code: "dong-vat",
        name_local: "Động vật",
        name_alt: "Animals",
        group: WordGroup::Noun,
        keywords: &[
            "dong vat", "con cho", "con meo", "con ga", "con vit", "con bo", "con heo",
            "con lon", "con ngua", "con chim", "con ca", "con khi", "con ho", "con su tu",
            "thu cung",
        ],
        legacy_names: &["dong vat"],
    },
    CatalogEntry {
        code: "thuc-vat",
        name_local: "Thực vật",
        name_alt: "Plants",
        group: WordGroup::Noun,
        keywords: &[
            "thuc vat", "cay", "hoa", "la", "re", "than", "cay co", "cay an trai", "rau",
            "qua", "hat", "mam",
        ],
        legacy_names: &["cay coi"],
    },
    CatalogEntry {
        code: "do-vat-hang-ngay",
        name_local: "Đồ vật & vật dụng hằng ngày",
        name_alt: "Daily Objects",
        group: WordGroup::Noun,
        keywords: &[
            "do vat", "vat dung", "do dung", "vat pham", "chai", "ly", "bat", "noi",
            "chao", "dao", "keo", "may say", "den pin", "o khoa", "chot cua", "dong ho",
            "cap sac", "tai nghe", "vali", "tui xach", "balo", "niem phong", "but chi",
            "ngoc bich", "thuy tinh", "thach anh", "kim cuong", "vang", "bac", "dong",
            "sat", "nhom", "gang",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "nha-noi-that",
        name_local: "Nhà cửa & nội thất",
        name_alt: "Home & Interior",
        group: WordGroup::Noun,
        keywords: &[
            "ngoi nha", "can ho", "noi that", "phong khach", "phong ngu", "phong bep",
            "phong tam", "nha ve sinh", "san nha", "mai nha", "tu ao", "tu giay", "giuong",
            "sofa", "ban an", "den trang tri", "nha kho", "hang rao", "biet thu", "khoang",
            "buong", "kho", "phong kho", "khu vuc luu tru",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "thuc-pham-do-uong",
        name_local: "Thực phẩm & đồ uống",
        name_alt: "Food & Drinks",
        group: WordGroup::Noun,
        keywords: &[
            "thuc pham", "do an", "mon an", "thuc uong", "cafe", "tra", "banh", "thit",
            "ca", "hai san", "rau cu", "hoa qua", "trai cay", "do hop", "gia vi",
            "nuoc tuong", "bia", "ruou",
        ],
        legacy_names: &["do an", "thuc uong"],
    },
    CatalogEntry {
        code: "quan-ao-phu-kien",
        name_local: "Quần áo & phụ kiện",
        name_alt: "Clothing & Accessories",
        group: WordGroup::Noun,
        keywords: &[
            "quan ao", "ao so mi", "ao len", "ao khoac", "quan jean", "quan tay", "dam",
            "chan vay", "phu kien", "tui xach", "vi", "that lung", "day lung", "non", "mu",
            "gang tay", "tat", "giay", "dep", "khau trang", "kinh mat",
        ],
        legacy_names: &["quan ao"],
    },
    CatalogEntry {
        code: "do-hoc-tap",
        name_local: "Đồ dùng học tập",
        name_alt: "Study Essentials",
        group: WordGroup::Noun,
        keywords: &[
            "sach", "vo", "but", "but chi", "but may", "but muc", "giu sac", "hop but",
            "thuoc ke", "thuoc day", "thuoc do goc", "compa", "bang", "lop hoc",
            "phong hoc", "cap sach", "cham cau", "tieu chuan",
        ],
        legacy_names: &["truong hoc"],
    },
    CatalogEntry {
        code: "cong-cu-thiet-bi",
        name_local: "Công cụ & thiết bị",
        name_alt: "Tools & Devices",
        group: WordGroup::Noun,
        keywords: &[
            "cong cu", "thiet bi", "may", "may moc", "may khoan", "may cat", "may mai",
            "may han", "khoa mo", "bua", "tua vit", "kim loai", "bo luu tru", "cam bien",
            "bo mach", "dong co", "robot", "thiet bi y te",
        ],
        legacy_names: &["khoa hoc"],
    },
    CatalogEntry {
        code: "dia-diem",
        name_local: "Địa điểm (nơi chốn)",
        name_alt: "Locations",
        group: WordGroup::Noun,
        keywords: &[
            "dia diem", "thanh pho", "thi tran", "lang", "khu pho", "cong vien",
            "truong hoc", "benh vien", "nha tho", "chua", "dia diem du lich", "nui",
            "bien", "song", "cho", "sieu thi", "cua hang", "san bay", "ga tau", "ben xe",
            "khu cong nghiep", "van phong", "bien gioi", "ranh gioi", "khu vuc", "mien",
            "vung", "pho", "duong", "nga tu", "bo", "ven bien", "bai bien", "dong",
            "thung lung", "cao nguyen", "binh nguyen", "rung", "khu rung", "ho", "suoi",
        ],
        legacy_names: &["dia diem"],
    },
    CatalogEntry {
        code: "thien-nhien-moi-truong",
        name_local: "Thiên nhiên & môi trường",
        name_alt: "Nature & Environment",
        group: WordGroup::Noun,
        keywords: &[
            "thien nhien", "moi truong", "he sinh thai", "rung", "bien", "dong", "sa mac",
            "ho", "song", "dong chay", "dong bang", "khi hau", "bao ton",
            "nang luong xanh", "chat thai", "o nhiem", "khong khi", "dat dai", "dat lien",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "hien-tuong-tu-nhien",
        name_local: "Hiện tượng tự nhiên",
        name_alt: "Natural Phenomena",
        group: WordGroup::Noun,
        keywords: &[
            "hien tuong", "mua", "gio", "bao", "loc", "song than", "dong dat", "nui lua",
            "tuyet", "suong mu", "sam set", "nang nong", "ret dam", "lu lut", "thoi tiet",
            "ap thap", "ap cao",
        ],
        legacy_names: &["thoi tiet"],
    },
    CatalogEntry {
        code: "khai-niem-truu-tuong",
        name_local: "Khái niệm trừu tượng",
        name_alt: "Abstract Concepts",
        group: WordGroup::Noun,
        keywords: &[
            "khai niem", "y tuong", "truu tuong", "thoi gian", "lich su", "qua khu",
            "tuong lai", "tu duy", "nho lai", "quan diem", "gia tri", "dao duc",
            "nguyen tac", "quy tac", "quy dinh", "trach nhiem", "nghia vu", "quyen loi",
            "muc tieu", "chien luoc",
        ],
        legacy_names: &["tu truu tuong", "thoi gian"],
    },
    CatalogEntry {
        code: "su-kien-xa-hoi",
        name_local: "Sự kiện & hiện tượng xã hội",
        name_alt: "Social Events",
        group: WordGroup::Noun,
        keywords: &[
            "su kien", "le hoi", "le ky niem", "cuoc hop", "hoi nghi", "hoi thao",
            "van dong", "phong trao", "chien tranh", "chinh tri", "bieu tinh", "xung dot",
            "doi moi", "khung hoang", "bao dong", "tin tuc",
        ],
        legacy_names: &["chinh tri"],
    },
    CatalogEntry {
        code: "cong-nghe-truyen-thong",
        name_local: "Công nghệ & truyền thông",
        name_alt: "Technology & Media",
        group: WordGroup::Noun,
        keywords: &[
            "cong nghe", "ky thuat so", "may tinh", "may chu", "lap trinh", "phan mem",
            "ung dung", "ai", "tri tue nhan tao", "thiet bi so", "internet", "mang xa hoi",
            "bao chi", "truyen hinh", "da phuong tien", "vien thong", "tin nhan", "email",
            "podcast", "livestream",
        ],
        legacy_names: &["cong nghe", "khoa hoc"],
    },
    CatalogEntry {
        code: "tien-tai-chinh",
        name_local: "Tiền bạc & tài chính",
        name_alt: "Money & Finance",
        group: WordGroup::Noun,
        keywords: &[
            "tien", "tai chinh", "ngan hang", "tai san", "von", "gia ca", "gia tien",
            "chi phi", "thu nhap", "chi tieu", "tiet kiem", "dau tu", "co phieu",
            "trai phieu", "lai suat", "ty gia", "ngan sach", "tai khoan", "hoa don",
            "thanh toan", "thu phi", "hoa hong",
        ],
        legacy_names: &["mua sam", "kinh te"],
    },
    CatalogEntry {
        code: "hanh-dong-co-ban",
        name_local: "Hành động cơ bản",
        name_alt: "Basic Actions",
        group: WordGroup::Verb,
        keywords: &[
            "lay", "giu", "nam bat", "tha", "nem", "day", "keo", "mo", "dong", "cat", "xe",
            "chem", "bam", "bop", "be", "dap", "day len", "day xuong", "xoay",
            "trau chuot", "khuay", "pha", "gom",
        ],
        legacy_names: &["hanh dong"],
    },
    CatalogEntry {
        code: "hoat-dong-co-the",
        name_local: "Hoạt động cơ thể",
        name_alt: "Physical Activities",
        group: WordGroup::Verb,
        keywords: &[
            "an", "uong", "nghi ngo", "ngu", "thuc day", "thuc giac", "tap the duc",
            "ren luyen", "hit tho", "tho", "nho mat", "chop mat", "mui", "nghe", "kham",
            "chay", "nhay", "boi", "leo", "truot", "ren", "tri lieu",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "di-chuyen-giao-thong",
        name_local: "Di chuyển & giao thông",
        name_alt: "Movement & Transport",
        group: WordGroup::Verb,
        keywords: &[
            "di chuyen", "di bo", "di xe", "len tau", "len may bay", "di xe bus",
            "di xe buyt", "hanh ly", "khoi hanh", "cat canh", "ha canh", "du lich",
            "hanh trinh", "chuyen bay", "dat ve", "van chuyen", "giao thong",
        ],
        legacy_names: &["phuong tien"],
    },
    CatalogEntry {
        code: "giao-tiep",
        name_local: "Hoạt động giao tiếp",
        name_alt: "Communication Actions",
        group: WordGroup::Verb,
        keywords: &[
            "noi", "ke", "hoi", "tra loi", "tra loi lai", "tra loi ngay", "goi",
            "goi dien", "nhan", "nhan tin", "nhan thong bao", "viet thu", "viet email",
            "truyen tai", "doi thoai", "phan hoi", "tham do", "bao cao", "phat bieu",
            "gioi thieu", "tranh luan", "thuc giuc", "boc lo", "bo loc", "tiet lo",
            "cong bo", "thong bao", "thong tin", "cam on", "xin loi", "chao hoi",
            "ket ban", "tiep xuc", "gap go", "phong van", "san tin", "tham quan",
            "tham du", "tham gia",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "tu-duy",
        name_local: "Hoạt động tư duy",
        name_alt: "Thinking",
        group: WordGroup::Verb,
        keywords: &[
            "nghi", "suy nghi", "can nhac", "phan tich", "danh gia", "hinh dung",
            "tuong tuong", "ghi nho", "nho lai", "quen", "hieu", "tim hieu", "kham pha",
            "nghi ngo", "tin tuong", "quyet dinh", "du doan", "tu duy",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "trang-thai-tam-ly",
        name_local: "Trạng thái – tâm lý",
        name_alt: "Mental States",
        group: WordGroup::Verb,
        keywords: &[
            "yeu", "ghet", "thich", "khong thich", "chiu dung", "chiu dung duoc",
            "cam thay", "cam nhan", "tu hao", "hoi hop", "hoang so", "so hai", "tu tin",
            "tuyet vong", "hi vong", "mong cho", "tiet nuoi", "an han", "an ui", "oan han",
            "phan nan", "bi quan",
        ],
        legacy_names: &["cam xuc"],
    },
    CatalogEntry {
        code: "cong-viec-ky-thuat",
        name_local: "Công việc – thao tác kỹ thuật",
        name_alt: "Work & Technical Actions",
        group: WordGroup::Verb,
        keywords: &[
            "lap dat", "lap trinh", "van hanh", "kiem tra", "sua chua", "bao tri",
            "giam sat", "quan ly", "to chuc", "phoi hop", "ban giao", "ky ket",
            "thuc hien", "trien khai", "thi cong", "thi nghiem", "thu nghiem",
            "phan hoi ky thuat", "thao tac", "lam viec", "xu ly", "dieu khien",
        ],
        legacy_names: &["cong viec"],
    },
    CatalogEntry {
        code: "hoc-tap-luyen-tap",
        name_local: "Học tập & luyện tập",
        name_alt: "Learning & Practice",
        group: WordGroup::Verb,
        keywords: &[
            "hoc", "hoc tap", "ren luyen", "on tap", "on bai", "luyen chu",
            "luyen phat am", "lam bai", "thi", "kiem tra", "thuc hanh", "nghien cuu",
            "doc sach", "ghi chu", "tham gia lop", "thuc tap", "lam bai tap", "tot nghiep",
            "hoan thanh", "ket thuc", "thi tot nghiep",
        ],
        legacy_names: &["so thich"],
    },
    CatalogEntry {
        code: "sinh-hoat-hang-ngay",
        name_local: "Sinh hoạt hằng ngày",
        name_alt: "Daily Routine",
        group: WordGroup::Verb,
        keywords: &[
            "don dep", "ve sinh", "quet nha", "lau nha", "giat do", "phoi do", "lau chen",
            "nau an", "di cho", "doc bao", "xem phim", "xem tv", "choi the thao",
            "tap gym", "uom cay", "choi nhac", "san soc", "tan huong", "thu gian",
        ],
        legacy_names: &["the thao", "so thich"],
    },
    CatalogEntry {
        code: "tinh-chat-mo-ta",
        name_local: "Tính chất mô tả",
        name_alt: "Descriptive Traits",
        group: WordGroup::Adjective,
        keywords: &[
            "dep", "xau", "cao", "thap", "ron rang", "yen lang", "rong", "hep", "sach",
            "ban", "man", "ngot", "dang", "chua", "mem", "cung", "ben", "mong", "day",
            "nhe", "nang", "tinh te", "tho", "em dem", "vu ng ve", "vung ve", "go ghe",
            "loi lom", "khac", "chia lia", "kho chiu", "chuong", "ky quac", "tranh",
            "boc lot", "loi dung", "khong chi", "ngang nhau", "bi tham", "thuc te",
            "kho khan", "de dang", "nhanh chong", "cham chap", "thong minh", "ngu dot",
            "hieu biet", "van minh", "tho so", "tien tien", "hien dai", "co xua", "tram",
            "on ao", "yen tinh", "im lang", "sang suot", "mo mo", "ro rang",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "cam-xuc-tinh-than",
        name_local: "Cảm xúc & trạng thái tinh thần",
        name_alt: "Emotional States",
        group: WordGroup::Adjective,
        keywords: &[
            "vui", "buon", "biet on", "lo lang", "hoi hop", "nong nay", "binh tinh",
            "hao hung", "nhao nhac", "co don", "doi phuong", "tho o", "tich cuc",
            "tieu cuc", "chan nan", "hung phan", "bi tham", "bi quan", "vu ng ve",
            "vung ve", "oan han", "phan nan", "an han", "an ui", "buon ba", "dau kho",
            "hai long", "bat binh", "thu hien", "kinh trong", "than phuc",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "hinh-dang-kich-thuoc",
        name_local: "Hình dạng & kích thước",
        name_alt: "Shape & Size",
        group: WordGroup::Adjective,
        keywords: &[
            "tron", "vuong", "tam giac", "dai", "ngan", "rong", "hep", "cao", "thap",
            "nho", "lon", "mini", "khong lo", "vi mo", "khoi", "phang", "cong", "lech",
            "loi lom", "go ghe", "rang cuoc",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "mau-sac",
        name_local: "Màu sắc",
        name_alt: "Colors",
        group: WordGroup::Adjective,
        keywords: &[
            "mau", "do", "xanh", "vang", "tim", "hong", "cam", "den", "trang", "nau",
            "xam", "bac", "vang anh", "anh kim", "da cam", "luc", "lam", "chanh",
        ],
        legacy_names: &["mau sac"],
    },
    CatalogEntry {
        code: "muc-do-so-sanh",
        name_local: "Mức độ & so sánh",
        name_alt: "Degree & Comparison",
        group: WordGroup::Adjective,
        keywords: &[
            "hon", "kem", "tuong duong", "nhat", "nhi", "rat", "cuc ky", "vo cung",
            "vua phai", "it", "nhieu", "hon nua", "doi chut", "gan nhu", "xu huong",
            "tang", "giam", "hon han",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "so-luong-dem",
        name_local: "Số lượng & số đếm",
        name_alt: "Numbers & Quantity",
        group: WordGroup::Special,
        keywords: &[
            "so", "so dem", "thu tu", "thu nhat", "thu hai", "phan tram", "phan so",
            "phan loai", "doi", "cap", "chu so", "thap phan", "don vi", "so le", "le chan",
            "khoi luong", "do dai", "dien tich", "the tich", "khong du", "khoang cach",
            "do rong", "chieu cao", "chieu rong", "chieu dai", "chieu sau",
        ],
        legacy_names: &["so dem", "so luong"],
    },
    CatalogEntry {
        code: "luong-tu",
        name_local: "Lượng từ",
        name_alt: "Measure Words",
        group: WordGroup::Special,
        keywords: &[
            "luong tu", "cai", "con", "vien", "mieng", "tam", "canh", "kien", "to",
            "nguoi", "dong", "khoi", "chiec", "bo", "cap", "doi", "coc", "chen", "bat",
            "giot",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "trang-tu",
        name_local: "Trạng từ / phó từ",
        name_alt: "Adverbs",
        group: WordGroup::Special,
        keywords: &[
            "rat", "kha", "hoi", "cam thay", "thuong", "thuong xuyen", "doi khi",
            "doi luc", "luon", "bao gio", "da", "dang", "sap", "se", "vua", "dang khi",
            "tung", "chua tung", "can", "phai", "khong can", "nhat thiet",
        ],
        legacy_names: &["tu ngu phap"],
    },
    CatalogEntry {
        code: "gioi-tu",
        name_local: "Giới từ",
        name_alt: "Prepositions",
        group: WordGroup::Special,
        keywords: &[
            "trong", "ngoai", "tren", "duoi", "giua", "ben", "gan", "xa", "truoc", "sau",
            "ben trai", "ben phai", "doi dien", "xung quanh", "ke ben", "xuyen qua",
            "dinh", "vao", "ra", "can cu theo", "can cu", "dua theo", "theo", "tu", "den",
            "ve", "o", "tai", "bang", "voi", "cho", "vi", "do", "boi", "nhu", "giong nhu",
        ],
        legacy_names: &["phuong huong"],
    },
    CatalogEntry {
        code: "lien-tu",
        name_local: "Liên từ",
        name_alt: "Conjunctions",
        group: WordGroup::Special,
        keywords: &[
            "va", "nhung", "tuy nhien", "song", "nhung ma", "neu", "neu nhu", "neu khong",
            "khi", "khi nao", "boi vi", "vi", "do do", "vi the", "vi vay", "mac du",
            "dan den", "ca hai", "mot khi",
        ],
        legacy_names: &["tu ngu phap"],
    },
    CatalogEntry {
        code: "tro-tu",
        name_local: "Trợ từ",
        name_alt: "Particles",
        group: WordGroup::Special,
        keywords: &[
            "a", "ba", "ma", "ne", "da", "de", "le", "la", "co", "chinh la", "thi", "ay",
            "co ma", "thoi", "nay", "ay ma", "thoi ma", "khong", "phai", "can",
            "khong duoc", "khong the khong", "khong du", "duoc", "khong the", "bat buoc",
            "nhat dinh", "chang le", "chang phai",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "hu-tu-tro-ngu-khi",
        name_local: "Hư từ / trợ ngữ khí",
        name_alt: "Modal Particles",
        group: WordGroup::Special,
        keywords: &[
            "nhe", "thoi", "co the", "nen", "nhat dinh", "co le", "co khi", "hinh nhu",
            "sao", "chu", "co ma", "ma nhi", "a nha", "nha", "chu nhi", "thoi nhi",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "than-tu",
        name_local: "Thán từ / cảm thán",
        name_alt: "Interjections",
        group: WordGroup::Special,
        keywords: &[
            "oi", "troi oi", "a", "ui", "oi troi", "chao oi", "ay da", "hey", "nay",
            "a ha", "wow", "haizz", "ai cha", "chep", "ha", "ack", "iu cha",
        ],
        legacy_names: &["tu cam than"],
    },
    CatalogEntry {
        code: "tu-tuong-thanh",
        name_local: "Từ tượng thanh – tượng hình",
        name_alt: "Onomatopoeia",
        group: WordGroup::Special,
        keywords: &[
            "leng keng", "ro ro", "ro rang", "am am", "am i", "xao xac", "ri rit",
            "loang xoang", "loang choang", "cach cach", "vut", "vim", "vut mot",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "mua-sam-giao-dich",
        name_local: "Mua sắm & giao dịch",
        name_alt: "Shopping & Transactions",
        group: WordGroup::Situation,
        keywords: &[
            "mua sam", "mua ban", "thuong luong", "tra gia", "xu ly don", "thanh toan",
            "giao dich", "tra gop", "uu dai", "khuyen mai", "giam gia", "hoa don",
            "bien lai", "doi tra", "bao hanh", "doi hang", "chinh sach", "thu cua hang",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "truong-lop",
        name_local: "Trường học & lớp học",
        name_alt: "School & Classroom",
        group: WordGroup::Situation,
        keywords: &[
            "truong", "lop", "phong hoc", "thay co", "hoc sinh", "sinh vien", "giao an",
            "bai giang", "hoc lieu", "thu vien", "ky thi", "ki thi", "tong ket",
            "ho so hoc tap", "giang duong", "ky tuc xa", "ban hoc", "ghe hoc",
            "ban thu vien",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "cong-viec-van-phong",
        name_local: "Công việc & văn phòng",
        name_alt: "Office & Worklife",
        group: WordGroup::Situation,
        keywords: &[
            "van phong", "hop", "lich hop", "lich lam viec", "lich bieu", "du an",
            "bao cao", "ke hoach", "chien luoc", "ban giao", "ky ket", "bao cao tien do",
            "thanh tich", "danh gia", "muc tieu", "nhan su", "bo phan", "phong ban",
            "huan luyen",
        ],
        legacy_names: &[],
    },
    CatalogEntry {
        code: "suc-khoe-benh",
        name_local: "Sức khỏe & bệnh",
        name_alt: "Health & Illness",
        group: WordGroup::Situation,
        keywords: &[
            "suc khoe", "benh", "trieu chung", "khai bao", "kham", "chu benh", "thuoc",
            "phuong phap", "phau thuat", "xet nghiem", "du phong", "che do an",
            "dinh duong", "phuc hoi", "tiem", "vac xin", "kiem tra dinh ky", "y te",
            "ung thu", "cam cum",
        ],
        legacy_names: &["suc khoe"],
    },
    CatalogEntry {
        code: "quan-he-ung-xu",
        name_local: "Mối quan hệ xã hội & ứng xử",
        name_alt: "Relationships & Etiquette",
        group: WordGroup::Situation,
        keywords: &[
            "ung xu", "ung xu xa hoi", "giao tiep", "phong cach", "phep tac", "ton trong",
            "lich su", "ket ban", "ket noi", "giup do", "hop tac", "chia se", "dong cam",
            "lang nghe", "giai quyet xung dot", "thau hieu", "doi thoai",
        ],
        legacy_names: &["cam xuc"],
    },
    CatalogEntry {
        code: "van-hoa-le-nghi",
        name_local: "Văn hóa – thói quen – lễ nghi",
        name_alt: "Culture & Customs",
        group: WordGroup::Situation,
        keywords: &[
            "van hoa", "le hoi", "truyen thong", "le nghia", "tap quan", "thoi quen",
            "nghi le", "hon le", "tang le", "tet", "tet nguyen dan", "tet trung thu",
            "cuoi hoi", "an hoi", "cuoi xin", "dau nam", "cuoi nam", "nghi le quoc gia",
        ],
        legacy_names: &["van hoa"],
    },
];
