//! Built-in word lists, split by language.
//!
//! Lists used for substring checks hold lowercase fragments; lists that feed
//! lemma sets hold whole words and are lemmatized when a [`Lexicon`] is built.
//!
//! [`Lexicon`]: crate::Lexicon

use lidbot_core::Language;

pub(crate) struct WordList {
    pub(crate) ru: &'static [&'static str],
    pub(crate) en: &'static [&'static str],
}

impl WordList {
    pub(crate) fn for_language(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Russian => self.ru,
            Language::English => self.en,
        }
    }
}

// Drugs, fraud, gambling, adult content and channel promotion.
pub(crate) const BANNED: WordList = WordList {
    ru: &[
        "наркот", "мета", "амфет", "героин", "кокаин", "спайс", "травк",
        "мошенн", "скам", "лохотрон", "пирамид", "обман", "фейк", "подделк", "скаммер",
        "казино", "ставк", "беттинг", "порно", "эротик", "18+", "xxx",
        "крипто-", "бинарн", "форекс сигнал", "продвижение канала", "раскрутка",
    ],
    en: &[
        "weed", "cocaine", "heroin", "mdma", "fake passport", "18+", "xxx",
    ],
};

pub(crate) const REAL_ESTATE: WordList = WordList {
    ru: &[
        "студи", "квартир", "комнат", "апартамент", "недвижимост",
        "жилье", "жилья", "мастеррум",
    ],
    en: &["bedroom", "apartment", "studio", "flat", "property", "real estate"],
};

// Forum boilerplate reposted across chats.
pub(crate) const SPAM: WordList = WordList {
    ru: &[
        "ознакомься с правилами", "подобные форумы", "туры, отели, прокат машин",
        "всё о рекламе в телеграм", "репетиторы онлайн", "пробное занятие",
    ],
    en: &[],
};

// Drivers offering rides rather than clients wanting a car.
pub(crate) const TAXI: WordList = WordList {
    ru: &[
        "из джумейры на пальму", "от аэропорта до", "из дубая в абу",
        "могу забрать попутчиков", "еду из", "выезжаю из",
        "такси", "трансфер", "поездка", "еду", "подвезти", "довезти",
    ],
    en: &["from sharjah to dubai", "from dubai to", "pick up passengers", "transfer"],
};

pub(crate) const JOB: WordList = WordList {
    ru: &["ваканси", "работа", "зарплат", "требуют", "ищем сотруд", "мойщик"],
    en: &["cleaner", "hiring"],
};

pub(crate) const CHILDREN: WordList = WordList {
    ru: &["детск"],
    en: &[],
};

pub(crate) const TOY: WordList = WordList {
    ru: &["игруш", "toy"],
    en: &["toy"],
};

pub(crate) const VEHICLE: WordList = WordList {
    ru: &[
        "машина", "автомобиль", "авто", "тачка", "машинка", "транспорт", "легковушка",
        "седан", "джип", "хэтчбек", "кроссовер", "внедорожник", "универсал", "фургон",
        "минивэн",
    ],
    en: &[
        "car", "cars", "auto", "vehicle", "vehicles", "suv", "jeep", "sedan",
        "hatchback", "crossover", "truck", "van", "minivan",
    ],
};

pub(crate) const INTENT: WordList = WordList {
    ru: &[
        "искать", "нужный", "нуждаться", "хотеть", "снять", "взять", "арендовать",
        "требоваться", "ищется", "надо", "нужно", "нужна", "нужен", "нужны",
        "хочу", "возьму", "понадобиться", "ищу", "помогите", "подходит", "подойдет", "ищем",
    ],
    en: &[
        "need", "needed", "require", "required", "looking", "want", "wanted", "wanna",
        "seek", "seeking", "search", "searching", "rent", "renting", "hire", "hiring",
        "book", "booking", "get", "getacar", "geta",
    ],
};

// Seller and agency vocabulary: business, pricing, contact channels.
pub(crate) const OFFER: WordList = WordList {
    ru: &[
        "продать", "продавать", "продажа", "продам", "сдать", "сдавать", "сдам", "сдаю",
        "сдается", "предлагать", "предложение", "предлагаем", "предлагаю",
        "услуга", "услуги", "сервис", "компания", "фирма", "магазин", "склад", "оптом",
        "цена", "стоимость", "тариф", "скидка", "акция", "звоните", "контакт",
        "whatsapp", "viber",
    ],
    en: &[
        "offer", "offers", "offering", "provide", "provides", "providing",
        "give", "gives", "giving", "sell", "sells", "selling", "sale", "sales",
        "company", "agency", "service", "services", "business",
        "rentacar", "rent-a-car",
        "price", "prices", "pricing", "cost", "costs", "discount", "discounts", "promo",
        "promotion", "available", "availability", "contact", "call", "whatsapp", "viber",
    ],
};

pub(crate) const RENTAL: WordList = WordList {
    ru: &["аренда", "арендовать", "арендую", "прокат", "снять", "взять", "напрокат"],
    en: &["rental", "rent", "renting", "hire", "hiring", "lease", "leasing"],
};

pub(crate) const CLIENT_PHRASES: WordList = WordList {
    ru: &[
        "нужна машина", "нужен автомобиль", "нужно авто", "нужна машина в аренду",
        "нужен автомобиль в аренду", "нужна машина напрокат", "нужно авто в аренду",
        "ищу машину", "ищу авто", "ищу автомобиль", "ищу машину в аренду",
        "ищу авто в аренду", "ищу машину напрокат", "ищу автомобиль в аренду",
        "ищу автопрокат", "ищу прокат", "ищу где арендовать",
        "хочу арендовать", "хочу взять", "хочу взять в аренду", "хочу снять",
        "хочу машину", "хочу авто", "хочу арендовать машину", "хочу арендовать авто",
        "где можно", "где взять", "где арендовать", "где снять", "где найти",
        "кто знает", "кто может", "кто сдает", "кто арендует",
        "подскажите", "помогите", "помогите найти", "помогите снять",
        "ищем машину", "ищем авто", "нужна на", "на день", "на неделю", "на месяц",
    ],
    en: &[
        "need a car", "need car", "need a car for rent", "need car rental",
        "looking for", "looking for a car", "looking for car rental",
        "want to rent", "want to rent a car", "want a car",
        "where to rent", "where can i rent", "who rents", "who can rent",
        "help me find", "can someone help", "anyone know", "anyone can help",
    ],
};

// Stems cheap enough to scan before tokenizing. Every RENTAL word of a
// language contains one of that language's quick stems.
pub(crate) const QUICK: WordList = WordList {
    ru: &[
        "машин", "авто", "тачк", "аренд", "прокат", "снять", "нуж", "ищ", "хоч", "взять",
    ],
    en: &["need", "rent", "car", "vehicle", "hir", "leas"],
};
