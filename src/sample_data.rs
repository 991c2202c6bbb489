// Sample Property Price Register style sales.

use crate::domain::record::{PropertyType::*, RawSale, SaleCondition::*};

pub const SAMPLE_SALES: &[RawSale] = &[
    RawSale { id: 1, address: "12 Fitzwilliam Square, Dublin 2", price: 850_000, date: "2024-11-15", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 2, address: "45 Merrion Road, Dublin 4", price: 1_200_000, date: "2024-10-22", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 3, address: "Apt 3, Smithfield Square, Dublin 7", price: 425_000, date: "2024-11-01", county: "Dublin", property_type: Apartment, size: New },
    RawSale { id: 4, address: "78 South Circular Road, Dublin 8", price: 520_000, date: "2024-09-18", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 5, address: "15 Donnybrook Road, Dublin 4", price: 950_000, date: "2024-10-05", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 6, address: "Apt 12, Grand Canal Dock, Dublin 2", price: 485_000, date: "2024-11-20", county: "Dublin", property_type: Apartment, size: New },
    RawSale { id: 7, address: "23 Rathmines Road, Dublin 6", price: 675_000, date: "2024-08-30", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 8, address: "56 Clontarf Road, Dublin 3", price: 720_000, date: "2024-09-12", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 9, address: "Apt 5, Ballsbridge, Dublin 4", price: 550_000, date: "2024-10-28", county: "Dublin", property_type: Apartment, size: SecondHand },
    RawSale { id: 10, address: "89 Rathgar Road, Dublin 6", price: 780_000, date: "2024-11-08", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 11, address: "34 Sandymount Road, Dublin 4", price: 890_000, date: "2023-11-15", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 12, address: "67 Ranelagh Road, Dublin 6", price: 650_000, date: "2023-10-22", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 13, address: "Apt 8, Docklands, Dublin 1", price: 395_000, date: "2023-09-18", county: "Dublin", property_type: Apartment, size: New },
    RawSale { id: 14, address: "45 Drumcondra Road, Dublin 9", price: 480_000, date: "2023-08-30", county: "Dublin", property_type: House, size: SecondHand },
    RawSale { id: 15, address: "23 Howth Road, Dublin 5", price: 610_000, date: "2023-07-12", county: "Dublin", property_type: House, size: SecondHand },
];
