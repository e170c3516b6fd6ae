pub mod node_list_contract;
