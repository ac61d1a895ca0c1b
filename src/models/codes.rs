//! ISO 3166-1 alpha-2 and alpha-3 codes, generated together with the country
//! table from a single master list.

use crate::models::country::Country;
use crate::models::currency::CurrencyCode;
use std::fmt;

macro_rules! countries {
    ($($a2:ident, $a3:ident, $num:literal, $name:literal, $currency:ident;)+) => {
        /// ISO 3166-1 alpha-2 code. `None` is the "no country" sentinel.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum Alpha2Code {
            #[default]
            None,
            $($a2,)+
        }

        /// ISO 3166-1 alpha-3 code. `None` is the "no country" sentinel.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum Alpha3Code {
            #[default]
            None,
            $($a3,)+
        }

        impl Alpha2Code {
            /// Canonical uppercase form, or `""` for `None`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Alpha2Code::None => "",
                    $(Alpha2Code::$a2 => stringify!($a2),)+
                }
            }
        }

        impl Alpha3Code {
            /// Canonical uppercase form, or `""` for `None`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Alpha3Code::None => "",
                    $(Alpha3Code::$a3 => stringify!($a3),)+
                }
            }
        }

        pub(crate) static COUNTRIES: &[Country] = &[
            $(Country {
                name: $name,
                alpha2: Alpha2Code::$a2,
                alpha3: Alpha3Code::$a3,
                numeric: $num,
                currency: CurrencyCode::$currency,
            },)+
        ];
    };
}

countries! {
    AD, AND, 20, "Andorra", EUR;
    AE, ARE, 784, "United Arab Emirates", AED;
    AF, AFG, 4, "Afghanistan", AFN;
    AG, ATG, 28, "Antigua and Barbuda", XCD;
    AI, AIA, 660, "Anguilla", XCD;
    AL, ALB, 8, "Albania", ALL;
    AM, ARM, 51, "Armenia", AMD;
    AO, AGO, 24, "Angola", AOA;
    AQ, ATA, 10, "Antarctica", None;
    AR, ARG, 32, "Argentina", ARS;
    AS, ASM, 16, "American Samoa", USD;
    AT, AUT, 40, "Austria", EUR;
    AU, AUS, 36, "Australia", AUD;
    AW, ABW, 533, "Aruba", AWG;
    AX, ALA, 248, "Åland Islands", EUR;
    AZ, AZE, 31, "Azerbaijan", AZN;
    BA, BIH, 70, "Bosnia and Herzegovina", BAM;
    BB, BRB, 52, "Barbados", BBD;
    BD, BGD, 50, "Bangladesh", BDT;
    BE, BEL, 56, "Belgium", EUR;
    BF, BFA, 854, "Burkina Faso", XOF;
    BG, BGR, 100, "Bulgaria", EUR;
    BH, BHR, 48, "Bahrain", BHD;
    BI, BDI, 108, "Burundi", BIF;
    BJ, BEN, 204, "Benin", XOF;
    BL, BLM, 652, "Saint Barthélemy", EUR;
    BM, BMU, 60, "Bermuda", BMD;
    BN, BRN, 96, "Brunei Darussalam", BND;
    BO, BOL, 68, "Bolivia", BOB;
    BQ, BES, 535, "Bonaire, Sint Eustatius and Saba", USD;
    BR, BRA, 76, "Brazil", BRL;
    BS, BHS, 44, "Bahamas", BSD;
    BT, BTN, 64, "Bhutan", BTN;
    BV, BVT, 74, "Bouvet Island", NOK;
    BW, BWA, 72, "Botswana", BWP;
    BY, BLR, 112, "Belarus", BYN;
    BZ, BLZ, 84, "Belize", BZD;
    CA, CAN, 124, "Canada", CAD;
    CC, CCK, 166, "Cocos (Keeling) Islands", AUD;
    CD, COD, 180, "Congo, Democratic Republic of the", CDF;
    CF, CAF, 140, "Central African Republic", XAF;
    CG, COG, 178, "Congo", XAF;
    CH, CHE, 756, "Switzerland", CHF;
    CI, CIV, 384, "Côte d'Ivoire", XOF;
    CK, COK, 184, "Cook Islands", NZD;
    CL, CHL, 152, "Chile", CLP;
    CM, CMR, 120, "Cameroon", XAF;
    CN, CHN, 156, "China", CNY;
    CO, COL, 170, "Colombia", COP;
    CR, CRI, 188, "Costa Rica", CRC;
    CU, CUB, 192, "Cuba", CUP;
    CV, CPV, 132, "Cabo Verde", CVE;
    CW, CUW, 531, "Curaçao", XCG;
    CX, CXR, 162, "Christmas Island", AUD;
    CY, CYP, 196, "Cyprus", EUR;
    CZ, CZE, 203, "Czechia", CZK;
    DE, DEU, 276, "Germany", EUR;
    DJ, DJI, 262, "Djibouti", DJF;
    DK, DNK, 208, "Denmark", DKK;
    DM, DMA, 212, "Dominica", XCD;
    DO, DOM, 214, "Dominican Republic", DOP;
    DZ, DZA, 12, "Algeria", DZD;
    EC, ECU, 218, "Ecuador", USD;
    EE, EST, 233, "Estonia", EUR;
    EG, EGY, 818, "Egypt", EGP;
    EH, ESH, 732, "Western Sahara", MAD;
    ER, ERI, 232, "Eritrea", ERN;
    ES, ESP, 724, "Spain", EUR;
    ET, ETH, 231, "Ethiopia", ETB;
    FI, FIN, 246, "Finland", EUR;
    FJ, FJI, 242, "Fiji", FJD;
    FK, FLK, 238, "Falkland Islands (Malvinas)", FKP;
    FM, FSM, 583, "Micronesia, Federated States of", USD;
    FO, FRO, 234, "Faroe Islands", DKK;
    FR, FRA, 250, "France", EUR;
    GA, GAB, 266, "Gabon", XAF;
    GB, GBR, 826, "United Kingdom", GBP;
    GD, GRD, 308, "Grenada", XCD;
    GE, GEO, 268, "Georgia", GEL;
    GF, GUF, 254, "French Guiana", EUR;
    GG, GGY, 831, "Guernsey", GBP;
    GH, GHA, 288, "Ghana", GHS;
    GI, GIB, 292, "Gibraltar", GIP;
    GL, GRL, 304, "Greenland", DKK;
    GM, GMB, 270, "Gambia", GMD;
    GN, GIN, 324, "Guinea", GNF;
    GP, GLP, 312, "Guadeloupe", EUR;
    GQ, GNQ, 226, "Equatorial Guinea", XAF;
    GR, GRC, 300, "Greece", EUR;
    GS, SGS, 239, "South Georgia and the South Sandwich Islands", GBP;
    GT, GTM, 320, "Guatemala", GTQ;
    GU, GUM, 316, "Guam", USD;
    GW, GNB, 624, "Guinea-Bissau", XOF;
    GY, GUY, 328, "Guyana", GYD;
    HK, HKG, 344, "Hong Kong", HKD;
    HM, HMD, 334, "Heard Island and McDonald Islands", AUD;
    HN, HND, 340, "Honduras", HNL;
    HR, HRV, 191, "Croatia", EUR;
    HT, HTI, 332, "Haiti", HTG;
    HU, HUN, 348, "Hungary", HUF;
    ID, IDN, 360, "Indonesia", IDR;
    IE, IRL, 372, "Ireland", EUR;
    IL, ISR, 376, "Israel", ILS;
    IM, IMN, 833, "Isle of Man", GBP;
    IN, IND, 356, "India", INR;
    IO, IOT, 86, "British Indian Ocean Territory", USD;
    IQ, IRQ, 368, "Iraq", IQD;
    IR, IRN, 364, "Iran", IRR;
    IS, ISL, 352, "Iceland", ISK;
    IT, ITA, 380, "Italy", EUR;
    JE, JEY, 832, "Jersey", GBP;
    JM, JAM, 388, "Jamaica", JMD;
    JO, JOR, 400, "Jordan", JOD;
    JP, JPN, 392, "Japan", JPY;
    KE, KEN, 404, "Kenya", KES;
    KG, KGZ, 417, "Kyrgyzstan", KGS;
    KH, KHM, 116, "Cambodia", KHR;
    KI, KIR, 296, "Kiribati", AUD;
    KM, COM, 174, "Comoros", KMF;
    KN, KNA, 659, "Saint Kitts and Nevis", XCD;
    KP, PRK, 408, "Korea, Democratic People's Republic of", KPW;
    KR, KOR, 410, "Korea, Republic of", KRW;
    KW, KWT, 414, "Kuwait", KWD;
    KY, CYM, 136, "Cayman Islands", KYD;
    KZ, KAZ, 398, "Kazakhstan", KZT;
    LA, LAO, 418, "Lao People's Democratic Republic", LAK;
    LB, LBN, 422, "Lebanon", LBP;
    LC, LCA, 662, "Saint Lucia", XCD;
    LI, LIE, 438, "Liechtenstein", CHF;
    LK, LKA, 144, "Sri Lanka", LKR;
    LR, LBR, 430, "Liberia", LRD;
    LS, LSO, 426, "Lesotho", LSL;
    LT, LTU, 440, "Lithuania", EUR;
    LU, LUX, 442, "Luxembourg", EUR;
    LV, LVA, 428, "Latvia", EUR;
    LY, LBY, 434, "Libya", LYD;
    MA, MAR, 504, "Morocco", MAD;
    MC, MCO, 492, "Monaco", EUR;
    MD, MDA, 498, "Moldova", MDL;
    ME, MNE, 499, "Montenegro", EUR;
    MF, MAF, 663, "Saint Martin (French part)", EUR;
    MG, MDG, 450, "Madagascar", MGA;
    MH, MHL, 584, "Marshall Islands", USD;
    MK, MKD, 807, "North Macedonia", MKD;
    ML, MLI, 466, "Mali", XOF;
    MM, MMR, 104, "Myanmar", MMK;
    MN, MNG, 496, "Mongolia", MNT;
    MO, MAC, 446, "Macao", MOP;
    MP, MNP, 580, "Northern Mariana Islands", USD;
    MQ, MTQ, 474, "Martinique", EUR;
    MR, MRT, 478, "Mauritania", MRU;
    MS, MSR, 500, "Montserrat", XCD;
    MT, MLT, 470, "Malta", EUR;
    MU, MUS, 480, "Mauritius", MUR;
    MV, MDV, 462, "Maldives", MVR;
    MW, MWI, 454, "Malawi", MWK;
    MX, MEX, 484, "Mexico", MXN;
    MY, MYS, 458, "Malaysia", MYR;
    MZ, MOZ, 508, "Mozambique", MZN;
    NA, NAM, 516, "Namibia", NAD;
    NC, NCL, 540, "New Caledonia", XPF;
    NE, NER, 562, "Niger", XOF;
    NF, NFK, 574, "Norfolk Island", AUD;
    NG, NGA, 566, "Nigeria", NGN;
    NI, NIC, 558, "Nicaragua", NIO;
    NL, NLD, 528, "Netherlands", EUR;
    NO, NOR, 578, "Norway", NOK;
    NP, NPL, 524, "Nepal", NPR;
    NR, NRU, 520, "Nauru", AUD;
    NU, NIU, 570, "Niue", NZD;
    NZ, NZL, 554, "New Zealand", NZD;
    OM, OMN, 512, "Oman", OMR;
    PA, PAN, 591, "Panama", PAB;
    PE, PER, 604, "Peru", PEN;
    PF, PYF, 258, "French Polynesia", XPF;
    PG, PNG, 598, "Papua New Guinea", PGK;
    PH, PHL, 608, "Philippines", PHP;
    PK, PAK, 586, "Pakistan", PKR;
    PL, POL, 616, "Poland", PLN;
    PM, SPM, 666, "Saint Pierre and Miquelon", EUR;
    PN, PCN, 612, "Pitcairn", NZD;
    PR, PRI, 630, "Puerto Rico", USD;
    PS, PSE, 275, "Palestine, State of", ILS;
    PT, PRT, 620, "Portugal", EUR;
    PW, PLW, 585, "Palau", USD;
    PY, PRY, 600, "Paraguay", PYG;
    QA, QAT, 634, "Qatar", QAR;
    RE, REU, 638, "Réunion", EUR;
    RO, ROU, 642, "Romania", RON;
    RS, SRB, 688, "Serbia", RSD;
    RU, RUS, 643, "Russian Federation", RUB;
    RW, RWA, 646, "Rwanda", RWF;
    SA, SAU, 682, "Saudi Arabia", SAR;
    SB, SLB, 90, "Solomon Islands", SBD;
    SC, SYC, 690, "Seychelles", SCR;
    SD, SDN, 729, "Sudan", SDG;
    SE, SWE, 752, "Sweden", SEK;
    SG, SGP, 702, "Singapore", SGD;
    SH, SHN, 654, "Saint Helena, Ascension and Tristan da Cunha", SHP;
    SI, SVN, 705, "Slovenia", EUR;
    SJ, SJM, 744, "Svalbard and Jan Mayen", NOK;
    SK, SVK, 703, "Slovakia", EUR;
    SL, SLE, 694, "Sierra Leone", SLE;
    SM, SMR, 674, "San Marino", EUR;
    SN, SEN, 686, "Senegal", XOF;
    SO, SOM, 706, "Somalia", SOS;
    SR, SUR, 740, "Suriname", SRD;
    SS, SSD, 728, "South Sudan", SSP;
    ST, STP, 678, "Sao Tome and Principe", STN;
    SV, SLV, 222, "El Salvador", USD;
    SX, SXM, 534, "Sint Maarten (Dutch part)", XCG;
    SY, SYR, 760, "Syrian Arab Republic", SYP;
    SZ, SWZ, 748, "Eswatini", SZL;
    TC, TCA, 796, "Turks and Caicos Islands", USD;
    TD, TCD, 148, "Chad", XAF;
    TF, ATF, 260, "French Southern Territories", EUR;
    TG, TGO, 768, "Togo", XOF;
    TH, THA, 764, "Thailand", THB;
    TJ, TJK, 762, "Tajikistan", TJS;
    TK, TKL, 772, "Tokelau", NZD;
    TL, TLS, 626, "Timor-Leste", USD;
    TM, TKM, 795, "Turkmenistan", TMT;
    TN, TUN, 788, "Tunisia", TND;
    TO, TON, 776, "Tonga", TOP;
    TR, TUR, 792, "Türkiye", TRY;
    TT, TTO, 780, "Trinidad and Tobago", TTD;
    TV, TUV, 798, "Tuvalu", AUD;
    TW, TWN, 158, "Taiwan", TWD;
    TZ, TZA, 834, "Tanzania, United Republic of", TZS;
    UA, UKR, 804, "Ukraine", UAH;
    UG, UGA, 800, "Uganda", UGX;
    UM, UMI, 581, "United States Minor Outlying Islands", USD;
    US, USA, 840, "United States", USD;
    UY, URY, 858, "Uruguay", UYU;
    UZ, UZB, 860, "Uzbekistan", UZS;
    VA, VAT, 336, "Holy See", EUR;
    VC, VCT, 670, "Saint Vincent and the Grenadines", XCD;
    VE, VEN, 862, "Venezuela", VES;
    VG, VGB, 92, "Virgin Islands (British)", USD;
    VI, VIR, 850, "Virgin Islands (U.S.)", USD;
    VN, VNM, 704, "Viet Nam", VND;
    VU, VUT, 548, "Vanuatu", VUV;
    WF, WLF, 876, "Wallis and Futuna", XPF;
    WS, WSM, 882, "Samoa", WST;
    YE, YEM, 887, "Yemen", YER;
    YT, MYT, 175, "Mayotte", EUR;
    ZA, ZAF, 710, "South Africa", ZAR;
    ZM, ZMB, 894, "Zambia", ZMW;
    ZW, ZWE, 716, "Zimbabwe", ZWG;
}

impl fmt::Display for Alpha2Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Alpha3Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl_string_serde!(Alpha2Code);
impl_string_serde!(Alpha3Code);
