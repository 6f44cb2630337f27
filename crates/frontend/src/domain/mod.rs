// Empleados
pub mod a101_employee;
pub mod a102_access_role;
pub mod a103_employee_role;

// Empresa
pub mod a201_company;
pub mod a202_warehouse;
pub mod a203_warehouse_manager;
pub mod a204_company_member;
pub mod a205_process;
pub mod a206_process_action;
pub mod a207_company_role;
pub mod a208_member_role;
pub mod a209_direct_permission;
pub mod a210_role_permission;
pub mod a211_reporting_line;
pub mod a212_org_unit;

// Inventario
pub mod a301_category;
pub mod a302_subcategory;
pub mod a303_group;
pub mod a304_subgroup;
pub mod a305_business_line;
pub mod a306_cost_center;
pub mod a307_ledger_account;
pub mod a308_valuation_method;
pub mod a309_product_type;
pub mod a310_product_lot;
pub mod a311_product;
pub mod a312_stock;
pub mod a313_product_accounting;
pub mod a314_movement_type;
pub mod a315_inventory_movement;
pub mod a316_movement_line;

// Ventas
pub mod a401_sales_zone;
pub mod a402_customer_type;
pub mod a403_payment_term;
pub mod a404_payment_method;
pub mod a405_price_list;
pub mod a406_product_price;
pub mod a407_customer;
pub mod a408_customer_contact;
pub mod a409_customer_address;
pub mod a410_invoice;
pub mod a411_invoice_line;
pub mod a412_collection;
pub mod a413_receivable;
